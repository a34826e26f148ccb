use crate::cli::Flags;
use crate::error::{Error, Result};
use crate::push::push;
use prometheus::Registry;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Runs the upload next to a signal listener until one of them finishes.
///
/// Whichever finishes first cancels the other, and both are waited for
/// before returning. A signal that arrives after the profile was already
/// accepted by the store does not turn the run into a failure.
pub async fn run(flags: Flags) -> Result<()> {
    let reg = Registry::new();
    let token = CancellationToken::new();

    let upload = tokio::spawn(push(flags, reg, token.clone()));
    let signals = tokio::spawn(wait_for_signal(token.clone()));

    supervise(upload, signals, token).await
}

async fn supervise(
    mut upload: JoinHandle<Result<()>>,
    mut signals: JoinHandle<Option<&'static str>>,
    token: CancellationToken,
) -> Result<()> {
    tokio::select! {
        res = &mut upload => {
            token.cancel();
            if let Err(e) = signals.await {
                log::warn!("Signal listener failed: {}", e);
            }
            res?
        }
        res = &mut signals => {
            token.cancel();
            let uploaded = upload.await?;
            match (res, uploaded) {
                (_, Ok(())) => Ok(()),
                (Ok(Some(signal)), Err(_)) => {
                    log::info!("Received {} signal, aborting upload", signal);
                    Err(Error::Interrupted(signal))
                }
                (_, Err(e)) => Err(e),
            }
        }
    }
}

async fn wait_for_signal(token: CancellationToken) -> Option<&'static str> {
    tokio::select! {
        _ = token.cancelled() => None,
        signal = interrupt() => Some(signal),
        signal = terminate() => Some(signal),
    }
}

async fn interrupt() -> &'static str {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for interrupt signal: {}", e);
        return std::future::pending().await;
    }
    "interrupt"
}

#[cfg(unix)]
async fn terminate() -> &'static str {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            if sigterm.recv().await.is_some() {
                return "terminated";
            }
        }
        Err(e) => log::warn!("Failed to listen for terminate signal: {}", e),
    }
    std::future::pending().await
}

#[cfg(not(unix))]
async fn terminate() -> &'static str {
    std::future::pending().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn upload_until_cancelled(token: &CancellationToken, outcome: Result<()>) -> JoinHandle<Result<()>> {
        let token = token.clone();
        tokio::spawn(async move {
            token.cancelled().await;
            outcome
        })
    }

    #[tokio::test]
    async fn finished_upload_stops_signal_listener() {
        let token = CancellationToken::new();
        let upload = tokio::spawn(async { Ok(()) });
        let signals = tokio::spawn(wait_for_signal(token.clone()));

        supervise(upload, signals, token.clone()).await.unwrap();
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn upload_error_is_returned() {
        let token = CancellationToken::new();
        let upload = tokio::spawn(async { Err(Error::Config("no address".into())) });
        let signals = tokio::spawn(wait_for_signal(token.clone()));

        let err = supervise(upload, signals, token).await.unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[tokio::test]
    async fn signal_interrupts_upload() {
        let token = CancellationToken::new();
        let upload = upload_until_cancelled(&token, Err(Error::Cancelled));
        let signals = tokio::spawn(async { Some("interrupt") });

        let err = supervise(upload, signals, token).await.unwrap_err();
        assert!(matches!(err, Error::Interrupted("interrupt")));
        assert_eq!(err.to_string(), "received signal interrupt");
    }

    #[tokio::test]
    async fn upload_that_finished_anyway_wins_over_signal() {
        let token = CancellationToken::new();
        let upload = upload_until_cancelled(&token, Ok(()));
        let signals = tokio::spawn(async { Some("terminated") });

        supervise(upload, signals, token).await.unwrap();
    }

    #[tokio::test]
    async fn panicking_upload_is_a_task_error() {
        let token = CancellationToken::new();
        let upload = tokio::spawn(async {
            let outcome: Result<()> = Err(Error::Cancelled);
            if outcome.is_err() {
                panic!("boom");
            }
            outcome
        });
        let signals = tokio::spawn(wait_for_signal(token.clone()));

        let err = tokio::time::timeout(Duration::from_secs(5), supervise(upload, signals, token))
            .await
            .unwrap()
            .unwrap_err();
        assert!(matches!(err, Error::Task(_)));
    }

    #[tokio::test]
    async fn listener_returns_nothing_once_cancelled() {
        let token = CancellationToken::new();
        token.cancel();
        assert_eq!(wait_for_signal(token).await, None);
    }
}
