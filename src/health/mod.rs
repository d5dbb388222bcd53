//! Health checking.
//!
//! `GET /api/health` probes a cheap upstream endpoint and reports binary
//! health plus a timestamp. Upstream non-success is "unhealthy" with the
//! observed status recorded; a network failure is "unhealthy" with
//! `accessible: false` and no status at all.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::http::AppState;

/// Body of the health response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    pub comick_api: UpstreamHealth,
}

/// Upstream portion of the health response.
///
/// `status` is absent when the probe never got a response.
#[derive(Debug, Serialize)]
pub struct UpstreamHealth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub accessible: bool,
}

/// Handler for `GET /api/health`.
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let probe_url = state.upstream.url_for(&state.upstream.health_probe_path);

    let probe = state
        .client
        .get(&probe_url)
        .header(header::USER_AGENT, state.upstream.user_agent.as_str())
        .send()
        .await;

    match probe {
        Ok(response) => {
            let healthy = response.status().is_success();
            let body = HealthResponse {
                status: if healthy { "healthy" } else { "unhealthy" },
                timestamp: now_rfc3339(),
                error: None,
                comick_api: UpstreamHealth {
                    status: Some(response.status().as_u16()),
                    accessible: healthy,
                },
            };

            let code = if healthy {
                StatusCode::OK
            } else {
                tracing::warn!(
                    status = response.status().as_u16(),
                    "Upstream health probe returned non-success status"
                );
                StatusCode::SERVICE_UNAVAILABLE
            };
            (code, Json(body))
        }
        Err(error) => {
            tracing::warn!(error = %error, probe_url = %probe_url, "Upstream health probe failed");
            let body = HealthResponse {
                status: "unhealthy",
                timestamp: now_rfc3339(),
                error: Some("Unable to reach Comick API"),
                comick_api: UpstreamHealth {
                    status: None,
                    accessible: false,
                },
            };
            (StatusCode::SERVICE_UNAVAILABLE, Json(body))
        }
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
