// Shared helpers for integration tests
// Author: kelexine (https://github.com/kelexine)

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;
use translate_relay::config::AppConfig;
use translate_relay::error::{RelayError, Result};
use translate_relay::provider::{LanguageDetector, TranslationProvider};

/// Dictionary-backed provider standing in for the upstream service.
#[derive(Default)]
pub struct StubProvider {
    pub detected: Option<String>,
    pub translate_error: Option<String>,
    pub detect_calls: AtomicUsize,
    pub translate_calls: AtomicUsize,
}

impl StubProvider {
    pub fn detecting(code: &str) -> Self {
        Self {
            detected: Some(code.to_string()),
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            detected: Some("en".to_string()),
            translate_error: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.detect_calls.load(Ordering::SeqCst) + self.translate_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LanguageDetector for StubProvider {
    async fn detect_language(&self, _text: &str) -> Result<String> {
        self.detect_calls.fetch_add(1, Ordering::SeqCst);
        self.detected
            .clone()
            .ok_or_else(|| RelayError::Provider("Could not detect language".to_string()))
    }
}

#[async_trait]
impl TranslationProvider for StubProvider {
    async fn translate(&self, text: &str, _source: &str, target: &str) -> Result<String> {
        self.translate_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(msg) = &self.translate_error {
            return Err(RelayError::Provider(msg.clone()));
        }
        Ok(match (text, target) {
            ("Hello", "es") => "Hola".to_string(),
            ("Bonjour", "en") => "Hello".to_string(),
            _ => format!("[{}] {}", target, text),
        })
    }
}

pub fn router(provider: Arc<StubProvider>) -> Router {
    router_with_config(AppConfig::default(), provider)
}

pub fn router_with_config(config: AppConfig, provider: Arc<StubProvider>) -> Router {
    translate_relay::server::create_router(config, provider.clone(), provider)
}

pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    post_bytes(app, uri, body.as_bytes().to_vec()).await
}

pub async fn post_bytes(app: Router, uri: &str, body: Vec<u8>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
