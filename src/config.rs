use crate::cli::{Flags, FlagsRemoteStore};
use crate::error::Error;
use crate::labels::LabelSet;
use crate::profile::ProfileSource;
use std::path::PathBuf;

/// Validated configuration of a single push.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: ProfileSource,
    pub labels: LabelSet,
    pub normalized: bool,
    pub override_timestamp: bool,
    pub remote_store: RemoteStoreConfig,
}

#[derive(Debug, Clone)]
pub struct RemoteStoreConfig {
    pub address: String,
    pub bearer_token: Option<BearerTokenSource>,
    pub insecure: bool,
    pub insecure_skip_verify: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BearerTokenSource {
    Inline(String),
    File(PathBuf),
}

impl TryFrom<Flags> for Config {
    type Error = Error;

    fn try_from(flags: Flags) -> Result<Self, Self::Error> {
        if flags.path.is_empty() {
            return Err(Error::Config("profile path is empty".into()));
        }

        Ok(Config {
            source: ProfileSource::from(flags.path.as_str()),
            labels: flags.labels.into_iter().collect(),
            normalized: flags.normalized,
            override_timestamp: flags.override_timestamp,
            remote_store: RemoteStoreConfig::try_from(flags.remote_store)?,
        })
    }
}

impl TryFrom<FlagsRemoteStore> for RemoteStoreConfig {
    type Error = Error;

    fn try_from(flags: FlagsRemoteStore) -> Result<Self, Self::Error> {
        let address = flags.address.trim().to_string();
        if address.is_empty() {
            return Err(Error::Config("--remote-store-address is required".into()));
        }

        let bearer_token = match (flags.bearer_token, flags.bearer_token_file) {
            (Some(_), Some(_)) => {
                return Err(Error::Config(
                    "--remote-store-bearer-token and --remote-store-bearer-token-file are mutually exclusive".into(),
                ))
            }
            (Some(token), None) => Some(BearerTokenSource::Inline(token)),
            (None, Some(path)) => Some(BearerTokenSource::File(path)),
            (None, None) => None,
        };

        Ok(RemoteStoreConfig {
            address,
            bearer_token,
            insecure: flags.insecure,
            insecure_skip_verify: flags.insecure_skip_verify,
        })
    }
}
