//! Translation and language-detection capabilities.
//!
//! The request handler only talks to the two narrow traits defined here, so
//! the upstream service can be swapped or stubbed without touching it.
//!
//! # Submodules
//!
//! - `google`: client for the public Google Translate web endpoint.
//! - `languages`: language-code table accepted by the provider.
//!
//! Author: kelexine (<https://github.com/kelexine>)

mod google;
pub mod languages;

pub use google::GoogleTranslateClient;

use crate::error::Result;
use async_trait::async_trait;

/// Guesses the language a piece of text is written in.
#[async_trait]
pub trait LanguageDetector: Send + Sync {
    /// Returns a language code such as `en` or `zh-CN`.
    ///
    /// Fails when the language cannot be determined (e.g. text too short).
    async fn detect_language(&self, text: &str) -> Result<String>;
}

/// Translates text between two languages.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate `text` from `source` (a code or `auto`) into `target`.
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String>;
}
