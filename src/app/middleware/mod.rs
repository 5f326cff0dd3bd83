use axum::http::{HeaderValue, Method, header};
use tower_http::cors::CorsLayer;
use tower_http::trace::{HttpMakeClassifier, TraceLayer};

/// Lets the browser client served from `origin` call the API.
pub fn cors(origin: &str) -> anyhow::Result<CorsLayer> {
    let origin: HeaderValue = origin
        .parse()
        .map_err(|err| anyhow::anyhow!("invalid `CORS_ORIGIN` {origin:?}: {err}"))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Logs one line per request and response.
pub fn request_log() -> TraceLayer<HttpMakeClassifier> {
    TraceLayer::new_for_http()
}
