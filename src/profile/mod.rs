mod timestamp;

use crate::error::{Error, Result};
use std::fmt;
use std::path::PathBuf;
use tokio::io::{AsyncRead, AsyncReadExt};

pub use timestamp::{override_timestamp, override_timestamp_at};

/// Path argument that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Where the raw pprof bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileSource {
    Stdin,
    File(PathBuf),
}

impl From<&str> for ProfileSource {
    fn from(path: &str) -> Self {
        if path == STDIN_PATH {
            ProfileSource::Stdin
        } else {
            ProfileSource::File(PathBuf::from(path))
        }
    }
}

impl fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileSource::Stdin => f.write_str("stdin"),
            ProfileSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl ProfileSource {
    /// Reads the whole profile, leaving its bytes untouched.
    pub async fn read(&self) -> Result<Vec<u8>> {
        match self {
            ProfileSource::Stdin => read_to_end(tokio::io::stdin())
                .await
                .map_err(Error::ReadStdin),
            ProfileSource::File(path) => {
                tokio::fs::read(path)
                    .await
                    .map_err(|source| Error::ReadFile {
                        path: path.clone(),
                        source,
                    })
            }
        }
    }
}

async fn read_to_end<R: AsyncRead + Unpin>(mut reader: R) -> std::io::Result<Vec<u8>> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content).await?;
    Ok(content)
}

pub(crate) fn is_gzip(content: &[u8]) -> bool {
    content.len() >= 2 && content[..2] == GZIP_MAGIC
}
