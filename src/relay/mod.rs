//! Relay proxy: a stateless forwarder to the provider's
//! `generateContent` endpoint.

pub mod routes;
pub mod upstream;

pub use routes::{RelayState, relay_routes};
pub use upstream::{Upstream, UpstreamResponse};

use tokio::net::TcpListener;
use tracing::info;

use crate::config::RelayConfig;
use crate::error::RelayError;

/// Bind and serve the relay until the process exits.
pub async fn serve(config: RelayConfig) -> Result<(), RelayError> {
    let state = RelayState::new(&config)?;
    let app = relay_routes(state);

    let listener = TcpListener::bind(config.bind).await?;
    info!(
        addr = %config.bind,
        upstream = %config.upstream_url(),
        "Relay listening"
    );
    axum::serve(listener, app).await?;
    Ok(())
}
