//! The forwarding handler.
//!
//! Maps an arbitrary inbound `/api/{*path}` request onto the upstream base
//! URL and relays the response verbatim (status, body, content-type), with
//! the permissive CORS headers attached. A single attempt is made per
//! inbound request; any failure collapses into the fixed 500 error body.

use axum::{
    body::{to_bytes, Body},
    extract::State,
    http::{header, HeaderValue, Method, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::config::UpstreamConfig;
use crate::http::{cors, AppState, X_REQUEST_ID};

/// Fixed error body returned whenever forwarding fails. Part of the public
/// contract; clients match on it.
pub const PROXY_ERROR_BODY: &str = r#"{"error": "Failed to proxy request to Comick API"}"#;

/// Everything that can go wrong between receiving an inbound request and
/// producing the relayed response.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("failed to read request body: {0}")]
    BodyRead(#[source] axum::Error),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("failed to assemble response: {0}")]
    Response(#[from] axum::http::Error),
}

/// Handler for GET/POST/PUT/DELETE on `/api/{*path}`.
///
/// The fallible work lives in [`attempt_forward`]; this handler only
/// translates an error of any kind into the fixed 500 response.
pub async fn forward_handler(
    State(state): State<AppState>,
    request: Request<Body>,
) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    match attempt_forward(&state, request).await {
        Ok(response) => response,
        Err(error) => {
            tracing::error!(
                request_id = %request_id,
                method = %method,
                path = %path,
                error = %error,
                "Failed to proxy request"
            );
            error_response()
        }
    }
}

/// Handler for `OPTIONS` on `/api/{*path}`.
///
/// Preflight responses never contact upstream: status 200, empty body, the
/// three CORS headers.
pub async fn preflight_handler() -> Response {
    let mut response = StatusCode::OK.into_response();
    cors::apply(response.headers_mut());
    response
}

/// Forward one request upstream and relay the response.
async fn attempt_forward(
    state: &AppState,
    request: Request<Body>,
) -> Result<Response, ForwardError> {
    let (parts, body) = request.into_parts();
    let target = target_url(&state.upstream, &parts.uri);

    tracing::debug!(
        method = %parts.method,
        target = %target,
        "Forwarding request upstream"
    );

    let mut outbound = state
        .client
        .request(parts.method.clone(), target.as_str())
        .header(header::USER_AGENT, state.upstream.user_agent.as_str());

    // The only inbound header relayed upstream; everything else is dropped.
    if let Some(authorization) = parts.headers.get(header::AUTHORIZATION) {
        outbound = outbound.header(header::AUTHORIZATION, authorization.clone());
    }

    // GET and HEAD must not carry a body upstream.
    if parts.method != Method::GET && parts.method != Method::HEAD {
        let bytes = to_bytes(body, usize::MAX)
            .await
            .map_err(ForwardError::BodyRead)?;
        outbound = outbound.body(bytes);
    }

    let upstream = outbound.send().await?;

    let status = upstream.status();
    let content_type = upstream
        .headers()
        .get(header::CONTENT_TYPE)
        .cloned()
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));
    let payload = upstream.bytes().await?;

    let mut response = Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(payload))?;
    cors::apply(response.headers_mut());
    Ok(response)
}

/// Rewrite an inbound URI onto the upstream base URL.
///
/// The `/api` prefix is stripped; the remaining path and the query string
/// are passed through verbatim, still percent-encoded.
fn target_url(upstream: &UpstreamConfig, uri: &Uri) -> String {
    let path = uri.path();
    let tail = path.strip_prefix("/api").unwrap_or(path);
    match uri.query() {
        Some(query) => upstream.url_for(&format!("{tail}?{query}")),
        None => upstream.url_for(tail),
    }
}

/// The fixed 500 response emitted whenever forwarding fails.
fn error_response() -> Response {
    let mut response = (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        PROXY_ERROR_BODY,
    )
        .into_response();
    cors::apply(response.headers_mut());
    response
}
