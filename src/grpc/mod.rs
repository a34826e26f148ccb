mod auth;
mod metrics;
mod tls;

use crate::config::RemoteStoreConfig;
use crate::error::Result;
use crate::profilestorepb::profile_store_service_client::ProfileStoreServiceClient;
use prometheus::Registry;
use std::time::Duration;
use tonic::codec::CompressionEncoding;
use tonic::service::interceptor::InterceptedService;
use tonic::transport::{Channel, Endpoint};

pub use auth::{load_bearer_token, AuthInterceptor};
pub use metrics::{ClientMetrics, MetricsService};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Profile store client over an authenticated, instrumented channel.
pub type Connection =
    ProfileStoreServiceClient<InterceptedService<MetricsService<Channel>, AuthInterceptor>>;

/// Builds the connection to the remote store.
///
/// The channel connects lazily: an unreachable address only shows up as an
/// error on the first call. The bearer token file, if any, is read here.
pub fn grpc_conn(reg: &Registry, config: &RemoteStoreConfig) -> Result<Connection> {
    let met = ClientMetrics::new()?;
    met.register(reg)?;

    let auth = AuthInterceptor::from_source(config.bearer_token.as_ref(), config.insecure)?;
    if auth.has_token() && !auth.require_transport_security() {
        log::warn!("Sending bearer token over a plaintext connection");
    }

    let uri = endpoint_uri(&config.address, config.insecure);
    log::debug!("Connecting to remote store at {}", uri);

    let endpoint = Endpoint::from_shared(uri)?.connect_timeout(CONNECT_TIMEOUT);
    let channel = if config.insecure {
        endpoint.connect_lazy()
    } else {
        let tls_config = tls::client_config(config.insecure_skip_verify)?;
        endpoint.connect_with_connector_lazy(tls::https_connector(tls_config))
    };

    Ok(
        ProfileStoreServiceClient::with_interceptor(MetricsService::new(channel, met), auth)
            .accept_compressed(CompressionEncoding::Gzip),
    )
}

/// Store addresses are given as `host:port`; the scheme follows the
/// transport security setting.
fn endpoint_uri(address: &str, insecure: bool) -> String {
    let authority = address
        .strip_prefix("http://")
        .or_else(|| address.strip_prefix("https://"))
        .unwrap_or(address);
    let scheme = if insecure { "http" } else { "https" };

    format!("{}://{}", scheme, authority)
}
