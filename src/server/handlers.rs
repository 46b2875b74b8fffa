// HTTP request handlers
// Author: kelexine (https://github.com/kelexine)

use super::routes::AppState;
use crate::error::RelayError;
use crate::metrics;
use crate::models::{LanguagesResponse, TranslationRequest, TranslationResponse};
use crate::provider::languages;
use crate::translation::translate_text;
use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::{extract::State, http::header, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub checks: HashMap<String, HealthCheck>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheck {
    pub status: String,
    pub message: String,
}

pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let mut checks = HashMap::new();
    let mut overall_status = HealthStatus::Healthy;

    // Check the provider endpoint
    let base_url = &state.config.provider.api_base_url;
    let provider_check = if base_url.starts_with("https://") {
        HealthCheck {
            status: "ok".to_string(),
            message: format!("Provider base: {}", base_url),
        }
    } else if base_url.starts_with("http://") {
        overall_status = HealthStatus::Degraded;
        HealthCheck {
            status: "warning".to_string(),
            message: format!("Provider base is not TLS: {}", base_url),
        }
    } else {
        overall_status = HealthStatus::Unhealthy;
        HealthCheck {
            status: "error".to_string(),
            message: format!("Provider base is not an HTTP URL: {}", base_url),
        }
    };
    checks.insert("configuration".to_string(), provider_check);

    checks.insert(
        "languages".to_string(),
        HealthCheck {
            status: "ok".to_string(),
            message: format!("{} languages available", languages::supported().len()),
        },
    );

    Json(HealthResponse {
        status: overall_status,
        checks,
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Handler for `POST /translate`
pub async fn translate_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>, // Raw body so every failure gets our error shape
) -> Result<Json<TranslationResponse>, RelayError> {
    let result = match body {
        Ok(bytes) => handle_translate(&state, &bytes).await,
        Err(rejection) => Err(RelayError::from(rejection)),
    };

    match &result {
        Ok(_) => metrics::record_request("success"),
        Err(e) => {
            metrics::record_request(e.outcome());
            match e {
                RelayError::Validation(_) | RelayError::Body { .. } => {
                    warn!("Rejected translate request: {}", e)
                }
                other => error!("Translate request failed: {}", other),
            }
        }
    }

    result.map(Json)
}

async fn handle_translate(
    state: &AppState,
    body: &[u8],
) -> Result<TranslationResponse, RelayError> {
    let raw: Value = serde_json::from_slice(body)
        .map_err(|e| RelayError::Validation(format!("Invalid JSON body: {}", e)))?;

    // Missing text wins over any other problem with the body
    let has_text = raw
        .get("text")
        .and_then(Value::as_str)
        .is_some_and(|t| !t.trim().is_empty());
    if !has_text {
        return Err(RelayError::no_text());
    }

    let req: TranslationRequest = serde_json::from_value(raw)
        .map_err(|e| RelayError::Validation(format!("Invalid request: {}", e)))?;

    info!(
        "Received translate request: source={}, target={}, flair={}, chars={}",
        req.source(),
        req.target(),
        req.flair(),
        req.text().map(str::len).unwrap_or(0)
    );

    let resp = translate_text(state.detector.as_ref(), state.translator.as_ref(), &req).await?;
    debug!("Responding with detected source {}", resp.detected_source);

    Ok(resp)
}

/// Handler for `GET /languages`
pub async fn languages_handler() -> Json<LanguagesResponse> {
    Json(LanguagesResponse {
        languages: languages::supported(),
    })
}

/// Handler for `GET /metrics` (Prometheus text format)
pub async fn metrics_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        metrics::gather_metrics(),
    )
}
