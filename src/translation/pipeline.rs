// Validate → detect → translate → decorate
// Author: kelexine (https://github.com/kelexine)

use super::flair::apply_flair;
use crate::error::{RelayError, Result};
use crate::models::{TranslationRequest, TranslationResponse};
use crate::provider::{LanguageDetector, TranslationProvider};
use tracing::debug;

/// Run one translation request against the given capabilities.
///
/// When the source is `auto` the detector runs first and its answer is
/// both passed to the translator and reported as `detected_source`. An
/// explicit source skips detection and is echoed back unchanged.
///
/// Validation happens before any provider is called. Provider failures are
/// returned as-is; nothing is retried.
pub async fn translate_text(
    detector: &dyn LanguageDetector,
    translator: &dyn TranslationProvider,
    request: &TranslationRequest,
) -> Result<TranslationResponse> {
    // 1. Validate
    let text = request.text().ok_or_else(RelayError::no_text)?;
    let target = request.target();

    // 2. Resolve source language
    let source = if request.is_auto_source() {
        let detected = detector.detect_language(text).await?;
        debug!("Detected source language: {}", detected);
        detected
    } else {
        request.source().to_string()
    };

    // 3. Translate
    let translated = translator.translate(text, &source, target).await?;
    debug!("Translated {} chars {} -> {}", text.len(), source, target);

    // 4. Decorate
    let translated_text = if request.flair() {
        apply_flair(&translated)
    } else {
        translated
    };

    Ok(TranslationResponse {
        translated_text,
        detected_source: source,
    })
}
