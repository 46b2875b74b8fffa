// Request/response bodies for the /translate endpoint
// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};

/// Sentinel source language asking for automatic detection.
pub const AUTO_SOURCE: &str = "auto";

/// Target language used when the client does not name one.
pub const DEFAULT_TARGET: &str = "en";

/// Inbound body of `POST /translate`.
///
/// Every field is optional; an explicit `null` behaves like an absent field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate. `None`, empty and whitespace-only are all rejected.
    #[serde(default)]
    pub text: Option<String>,

    /// Source language code; `None`, empty or `auto` request detection.
    #[serde(default)]
    pub source: Option<String>,

    /// Target language code; `None` or empty means `en`.
    #[serde(default)]
    pub target: Option<String>,

    /// Wrap the translated text in decorative markers.
    #[serde(default)]
    pub flair: Option<bool>,
}

impl TranslationRequest {
    /// Returns the text to translate, or `None` when there is nothing to do.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.trim().is_empty())
    }

    /// Source language code exactly as supplied, or `auto`.
    pub fn source(&self) -> &str {
        match self.source.as_deref() {
            None | Some("") => AUTO_SOURCE,
            Some(s) => s,
        }
    }

    /// Target language code exactly as supplied, or `en`.
    pub fn target(&self) -> &str {
        match self.target.as_deref() {
            None | Some("") => DEFAULT_TARGET,
            Some(t) => t,
        }
    }

    pub fn flair(&self) -> bool {
        self.flair.unwrap_or(false)
    }

    pub fn is_auto_source(&self) -> bool {
        self.source() == AUTO_SOURCE
    }
}

/// Successful reply of `POST /translate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResponse {
    pub translated_text: String,
    pub detected_source: String,
}

/// Failure reply shared by every endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Entry of the `GET /languages` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_minimal_body() {
        let req: TranslationRequest = serde_json::from_str(r#"{"text": "Hello"}"#).unwrap();
        assert_eq!(req.text(), Some("Hello"));
        assert_eq!(req.source(), "auto");
        assert_eq!(req.target(), "en");
        assert!(!req.flair());
        assert!(req.is_auto_source());
    }

    #[test]
    fn test_explicit_nulls_take_defaults() {
        let req: TranslationRequest = serde_json::from_str(
            r#"{"text": "Hi", "source": null, "target": null, "flair": null}"#,
        )
        .unwrap();
        assert_eq!(req.source(), "auto");
        assert_eq!(req.target(), "en");
        assert!(!req.flair());
    }

    #[test]
    fn test_explicit_source_is_kept_verbatim() {
        let req: TranslationRequest =
            serde_json::from_str(r#"{"text": "x", "source": " fr"}"#).unwrap();
        assert_eq!(req.source(), " fr");
        assert!(!req.is_auto_source());

        let req: TranslationRequest =
            serde_json::from_str(r#"{"text": "x", "source": "AUTO"}"#).unwrap();
        assert_eq!(req.source(), "AUTO");
        assert!(!req.is_auto_source());
    }

    #[test]
    fn test_null_and_blank_text_are_missing() {
        let req: TranslationRequest = serde_json::from_str(r#"{"text": null}"#).unwrap();
        assert_eq!(req.text(), None);

        let req: TranslationRequest = serde_json::from_str(r#"{"text": "   "}"#).unwrap();
        assert_eq!(req.text(), None);
    }

    #[test]
    fn test_empty_languages_fall_back() {
        let req: TranslationRequest =
            serde_json::from_str(r#"{"text": "x", "source": "", "target": ""}"#).unwrap();
        assert_eq!(req.source(), "auto");
        assert_eq!(req.target(), "en");
    }

    #[test]
    fn test_response_uses_camel_case() {
        let resp = TranslationResponse {
            translated_text: "Hola".to_string(),
            detected_source: "en".to_string(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["translatedText"], "Hola");
        assert_eq!(json["detectedSource"], "en");
    }
}
