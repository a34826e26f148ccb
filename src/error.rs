use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure of a push, tagged with the stage it happened in.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("read bearer token from file {}: {source}", path.display())]
    TokenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("create gRPC connection: {0}")]
    Connection(#[from] tonic::transport::Error),

    #[error("create gRPC connection: configure TLS: {0}")]
    Tls(#[from] rustls::Error),

    #[error("create gRPC connection: register client metrics: {0}")]
    Metrics(#[from] prometheus::Error),

    #[error("read profile from stdin: {0}")]
    ReadStdin(#[source] io::Error),

    #[error("read profile file {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parse pprof profile: decompress: {0}")]
    Decompress(#[source] io::Error),

    #[error("parse pprof profile: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("serialize pprof profile: {0}")]
    Encode(#[source] io::Error),

    #[error("write profile: {0}")]
    Upload(#[from] tonic::Status),

    #[error("operation cancelled")]
    Cancelled,

    #[error("received signal {0}")]
    Interrupted(&'static str),

    #[error("upload task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
