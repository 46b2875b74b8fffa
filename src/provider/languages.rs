// Language codes accepted by the translation provider
// Author: kelexine (https://github.com/kelexine)

use crate::models::LanguageEntry;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Lazily initialized language table using OnceLock (zero-cost, panic-free)
static LANGUAGE_MAP: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

/// Get or initialize the code → English name table
fn get_language_map() -> &'static HashMap<&'static str, &'static str> {
    LANGUAGE_MAP.get_or_init(|| {
        let mut m = HashMap::new();

        m.insert("af", "Afrikaans");
        m.insert("sq", "Albanian");
        m.insert("am", "Amharic");
        m.insert("ar", "Arabic");
        m.insert("hy", "Armenian");
        m.insert("az", "Azerbaijani");
        m.insert("eu", "Basque");
        m.insert("be", "Belarusian");
        m.insert("bn", "Bengali");
        m.insert("bs", "Bosnian");
        m.insert("bg", "Bulgarian");
        m.insert("ca", "Catalan");
        m.insert("zh-CN", "Chinese (Simplified)");
        m.insert("zh-TW", "Chinese (Traditional)");
        m.insert("hr", "Croatian");
        m.insert("cs", "Czech");
        m.insert("da", "Danish");
        m.insert("nl", "Dutch");
        m.insert("en", "English");
        m.insert("eo", "Esperanto");
        m.insert("et", "Estonian");
        m.insert("fi", "Finnish");
        m.insert("fr", "French");
        m.insert("gl", "Galician");
        m.insert("ka", "Georgian");
        m.insert("de", "German");
        m.insert("el", "Greek");
        m.insert("gu", "Gujarati");
        m.insert("ht", "Haitian Creole");
        m.insert("iw", "Hebrew");
        m.insert("hi", "Hindi");
        m.insert("hu", "Hungarian");
        m.insert("is", "Icelandic");
        m.insert("id", "Indonesian");
        m.insert("ga", "Irish");
        m.insert("it", "Italian");
        m.insert("ja", "Japanese");
        m.insert("kn", "Kannada");
        m.insert("kk", "Kazakh");
        m.insert("ko", "Korean");
        m.insert("lv", "Latvian");
        m.insert("lt", "Lithuanian");
        m.insert("mk", "Macedonian");
        m.insert("ms", "Malay");
        m.insert("ml", "Malayalam");
        m.insert("mt", "Maltese");
        m.insert("mr", "Marathi");
        m.insert("mn", "Mongolian");
        m.insert("ne", "Nepali");
        m.insert("no", "Norwegian");
        m.insert("fa", "Persian");
        m.insert("pl", "Polish");
        m.insert("pt", "Portuguese");
        m.insert("pa", "Punjabi");
        m.insert("ro", "Romanian");
        m.insert("ru", "Russian");
        m.insert("sr", "Serbian");
        m.insert("sk", "Slovak");
        m.insert("sl", "Slovenian");
        m.insert("es", "Spanish");
        m.insert("sw", "Swahili");
        m.insert("sv", "Swedish");
        m.insert("tl", "Filipino");
        m.insert("ta", "Tamil");
        m.insert("te", "Telugu");
        m.insert("th", "Thai");
        m.insert("tr", "Turkish");
        m.insert("uk", "Ukrainian");
        m.insert("ur", "Urdu");
        m.insert("uz", "Uzbek");
        m.insert("vi", "Vietnamese");
        m.insert("cy", "Welsh");
        m.insert("yi", "Yiddish");
        m.insert("zu", "Zulu");

        m
    })
}

/// All supported languages, sorted by code.
pub fn supported() -> Vec<LanguageEntry> {
    let mut entries: Vec<LanguageEntry> = get_language_map()
        .iter()
        .map(|(code, name)| LanguageEntry {
            code: code.to_string(),
            name: name.to_string(),
        })
        .collect();
    entries.sort_by(|a, b| a.code.cmp(&b.code));
    entries
}
