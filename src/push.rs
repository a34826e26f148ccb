use crate::cli::Flags;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::grpc;
use crate::profile;
use crate::profile_store::{write_profile, RawProfileWriter};
use prometheus::{Encoder, Registry, TextEncoder};
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// The upload task: validate flags, connect, read, transform and write.
pub async fn push(flags: Flags, reg: Registry, token: CancellationToken) -> Result<()> {
    let config = Config::try_from(flags)?;

    let mut conn = grpc::grpc_conn(&reg, &config.remote_store)?;
    push_profile(&config, &mut conn, &token).await?;

    if log::log_enabled!(log::Level::Debug) {
        log::debug!("Client metrics:\n{}", encode_metrics(&reg));
    }

    Ok(())
}

/// Reads the configured profile and writes it once through `writer`.
/// Each step starts only after the previous one succeeded.
pub async fn push_profile<W: RawProfileWriter>(
    config: &Config,
    writer: &mut W,
    token: &CancellationToken,
) -> Result<()> {
    let content = cancellable(token, config.source.read()).await??;
    log::debug!("Read {} bytes from {}", content.len(), config.source);

    let content = if config.override_timestamp {
        let content = profile::override_timestamp(&content)?;
        log::debug!("Overrode profile timestamp");
        content
    } else {
        content
    };

    cancellable(
        token,
        write_profile(writer, &config.labels, content, config.normalized),
    )
    .await?
}

async fn cancellable<F: Future>(token: &CancellationToken, fut: F) -> Result<F::Output> {
    tokio::select! {
        _ = token.cancelled() => Err(Error::Cancelled),
        out = fut => Ok(out),
    }
}

fn encode_metrics(reg: &Registry) -> String {
    let mut buf = Vec::new();
    if let Err(e) = TextEncoder::new().encode(&reg.gather(), &mut buf) {
        return format!("failed to encode metrics: {}", e);
    }
    String::from_utf8_lossy(&buf).into_owned()
}
