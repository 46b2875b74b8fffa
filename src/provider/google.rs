// Google Translate web endpoint client
// Author: kelexine (https://github.com/kelexine)

use super::{LanguageDetector, TranslationProvider};
use crate::config::ProviderConfig;
use crate::error::{RelayError, Result};
use crate::metrics;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const TRANSLATE_PATH: &str = "/translate_a/single";

/// Undetermined-language code returned for gibberish or empty input.
const UNDETERMINED: &str = "und";

/// Client for the public Google Translate `translate_a/single` endpoint.
///
/// One instance serves both capabilities: translation reads the sentence
/// segments of the response, detection reads the resolved source language.
/// No retries are attempted; the first failure is returned to the caller.
#[derive(Clone)]
pub struct GoogleTranslateClient {
    http_client: Client,
    base_url: String,
}

impl GoogleTranslateClient {
    /// Create a client with the configured timeouts.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .pool_idle_timeout(Duration::from_secs(90))
            .use_rustls_tls()
            .build()
            .map_err(|e| RelayError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Call the endpoint and return the decoded JSON body.
    async fn fetch(&self, text: &str, source: &str, target: &str) -> Result<Value> {
        let url = format!("{}{}", self.base_url, TRANSLATE_PATH);
        debug!("Calling {} (sl={}, tl={}, {} chars)", url, source, target, text.len());

        let params = [
            ("client", "gtx"),
            ("sl", source),
            ("tl", target),
            ("dt", "t"),
            ("q", text),
        ];

        let response = self
            .http_client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                RelayError::Provider(format!("Failed to reach translation service: {}", e))
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            RelayError::Provider(format!("Failed to read translation response: {}", e))
        })?;

        if !status.is_success() {
            warn!("Translation service returned {}: {}", status, truncate(&body, 200));
            return Err(RelayError::Provider(format!(
                "Translation service returned error: {} (source={}, target={})",
                status, source, target
            )));
        }

        serde_json::from_str(&body).map_err(|e| {
            RelayError::Provider(format!("Failed to parse translation response: {}", e))
        })
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslateClient {
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let started = Instant::now();
        let result = self
            .fetch(text, source, target)
            .await
            .and_then(|body| parse_translation(&body));

        let elapsed = started.elapsed().as_secs_f64();
        metrics::record_provider_call("translate", result.is_ok(), elapsed);
        result
    }
}

#[async_trait]
impl LanguageDetector for GoogleTranslateClient {
    async fn detect_language(&self, text: &str) -> Result<String> {
        let started = Instant::now();
        let result = self.fetch(text, "auto", "en").await.and_then(|body| {
            parse_detected_language(&body)
                .ok_or_else(|| RelayError::Provider("Could not detect language".to_string()))
        });

        let elapsed = started.elapsed().as_secs_f64();
        metrics::record_provider_call("detect", result.is_ok(), elapsed);
        result
    }
}

/// Concatenate the translated sentence segments found at `[0][*][0]`.
pub(crate) fn parse_translation(body: &Value) -> Result<String> {
    let segments = body.get(0).and_then(|v| v.as_array()).ok_or_else(|| {
        RelayError::Provider("Invalid translation response format: missing segments".to_string())
    })?;

    let translation: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|v| v.as_str()))
        .collect();

    if translation.is_empty() {
        return Err(RelayError::Provider("Empty translation received from provider".to_string()));
    }

    Ok(translation)
}

/// Read the resolved source language at index `[2]`.
pub(crate) fn parse_detected_language(body: &Value) -> Option<String> {
    let code = body.get(2)?.as_str()?.trim();
    if code.is_empty() || code.eq_ignore_ascii_case(UNDETERMINED) {
        return None;
    }
    Some(normalize_language_code(code))
}

/// Prefer ISO 639-1 codes; region-qualified codes (`zh-CN`) pass through.
pub(crate) fn normalize_language_code(code: &str) -> String {
    if code.len() == 3 {
        if let Some(short) = isolang::Language::from_639_3(&code.to_ascii_lowercase())
            .and_then(|lang| lang.to_639_1())
        {
            return short.to_string();
        }
    }
    code.to_string()
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
