use crate::labels::parse_label;
use clap::{ArgAction, Args, Parser};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "parca-push",
    version,
    about = "Push a pprof profile to a Parca compatible profile store"
)]
pub struct Flags {
    /// Path to the profile data, or `-` to read it from standard input.
    pub path: String,

    #[arg(
        short = 'l',
        long = "labels",
        value_name = "NAME=VALUE",
        value_parser = parse_label,
        value_delimiter = ';',
        action = ArgAction::Append,
        help = "Labels to attach to the profile data. For example --labels=__name__=process_cpu --labels=node=foo"
    )]
    pub labels: Vec<(String, String)>,

    #[arg(
        long,
        help = "Whether the profile sample addresses are already normalized by the mapping offset"
    )]
    pub normalized: bool,

    #[arg(
        long,
        help = "Update the timestamp in the pprof profile to be the current time"
    )]
    pub override_timestamp: bool,

    #[arg(long, default_value = "info", help = "Log level (off, error, warn, info, debug, trace)")]
    pub log_level: log::LevelFilter,

    #[command(flatten)]
    pub remote_store: FlagsRemoteStore,
}

/// Remote store connection flags, all prefixed with `remote-store-`.
#[derive(Debug, Args)]
pub struct FlagsRemoteStore {
    #[arg(
        long = "remote-store-address",
        default_value = "",
        help = "gRPC address to send profiles to"
    )]
    pub address: String,

    #[arg(
        long = "remote-store-bearer-token",
        conflicts_with = "bearer_token_file",
        help = "Bearer token to authenticate with store"
    )]
    pub bearer_token: Option<String>,

    #[arg(
        long = "remote-store-bearer-token-file",
        help = "File to read bearer token from to authenticate with store"
    )]
    pub bearer_token_file: Option<PathBuf>,

    #[arg(
        long = "remote-store-insecure",
        help = "Send gRPC requests via plaintext instead of TLS"
    )]
    pub insecure: bool,

    #[arg(
        long = "remote-store-insecure-skip-verify",
        help = "Skip TLS certificate verification"
    )]
    pub insecure_skip_verify: bool,
}
