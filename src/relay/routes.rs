//! HTTP surface of the relay.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::de::IgnoredAny;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{debug, info, warn};

use super::upstream::Upstream;
use crate::config::{AllowedOrigin, RelayConfig};
use crate::error::RelayError;

/// Shared state for relay handlers. Immutable; cloned per request.
#[derive(Clone)]
pub struct RelayState {
    upstream: Arc<Upstream>,
    allowed_origin: AllowedOrigin,
}

impl RelayState {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        Ok(Self {
            upstream: Arc::new(Upstream::new(config)?),
            allowed_origin: config.allowed_origin.clone(),
        })
    }
}

/// Build the relay router.
///
/// `OPTIONS` on any path is answered by the CORS layer itself and never
/// reaches a handler, so preflights cannot trigger an upstream call.
/// Every other response, errors included, also advertises the allowed
/// methods and headers.
pub fn relay_routes(state: RelayState) -> Router {
    let cors = cors_layer(&state.allowed_origin);

    Router::new()
        .route("/", post(relay))
        .route("/health", get(health))
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOWED_HEADERS),
        ))
        .with_state(state)
}

const ALLOWED_METHODS: &str = "POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type";

fn cors_layer(origin: &AllowedOrigin) -> CorsLayer {
    let allow_origin = match origin {
        AllowedOrigin::Any => AllowOrigin::any(),
        AllowedOrigin::Exact(value) => AllowOrigin::exact(value.clone()),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

// ── Health ──────────────────────────────────────────────────────────────

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "lifestyle-check-relay"
    }))
}

// ── Relay ───────────────────────────────────────────────────────────────

/// POST /
///
/// The body is only checked for JSON well-formedness, then forwarded as-is.
async fn relay(State(state): State<RelayState>, body: Bytes) -> Response {
    if let Err(e) = serde_json::from_slice::<IgnoredAny>(&body) {
        debug!(error = %e, "Rejecting malformed JSON body");
        return (StatusCode::BAD_REQUEST, "Invalid JSON").into_response();
    }

    match state.upstream.forward(body).await {
        Ok(upstream) => {
            info!(
                status = upstream.status.as_u16(),
                bytes = upstream.body.len(),
                "Relayed completion"
            );
            (
                upstream.status,
                [(header::CONTENT_TYPE, "application/json")],
                upstream.body,
            )
                .into_response()
        }
        Err(e) => {
            warn!(error = %e, "Upstream request failed");
            (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
        }
    }
}
