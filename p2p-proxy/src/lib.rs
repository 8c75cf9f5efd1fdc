pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod upstream;


use axum::{
    http::{header, HeaderName, HeaderValue},
    routing::{get, post, MethodRouter},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::upstream::UpstreamClient;

/// Path the relay was originally deployed under as a serverless function.
pub const FUNCTION_PATH: &str = "/.netlify/functions/binance-proxy";

// App state
pub struct AppState {
    pub upstream: UpstreamClient,
}

impl AppState {
    pub fn new(upstream_url: impl Into<String>) -> Self {
        Self {
            upstream: UpstreamClient::new(upstream_url),
        }
    }
}

fn relay_route() -> MethodRouter<Arc<AppState>> {
    post(handlers::relay)
        .options(handlers::preflight)
        .fallback(handlers::method_not_allowed)
}

fn set_header(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = ServiceBuilder::new()
        .layer(set_header(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            "Origin, X-Requested-With, Content-Type, Accept, Access-Control-Allow-Origin",
        ))
        .layer(set_header(header::CONTENT_TYPE, "application/json"))
        .layer(set_header(header::ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"))
        .layer(set_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .layer(set_header(header::ACCESS_CONTROL_MAX_AGE, "8640"))
        .layer(set_header(header::VARY, "Origin"));

    let relay = Router::new()
        .route("/", relay_route())
        .route(FUNCTION_PATH, relay_route())
        .layer(cors);

    Router::new()
        .route("/health", get(handlers::health_check))
        .merge(relay)
        .with_state(state)
}
