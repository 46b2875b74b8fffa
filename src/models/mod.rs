//! Data models for the translate-relay HTTP API.
//!
//! - `translate`: request/response bodies of `/translate` and `/languages`

// Author: kelexine (https://github.com/kelexine)

pub mod translate;

pub use translate::{
    ErrorResponse, LanguageEntry, LanguagesResponse, TranslationRequest, TranslationResponse,
    AUTO_SOURCE, DEFAULT_TARGET,
};
