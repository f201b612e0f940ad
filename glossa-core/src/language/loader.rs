//! Embedded language registry
//!
//! Built-in configurations are compiled into the crate and loaded on first
//! access.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::language::Language;

static LANGUAGES: OnceLock<HashMap<String, Language>> = OnceLock::new();

macro_rules! embed_language_config {
    ($code:expr, $path:expr) => {
        ($code, include_str!($path))
    };
}

fn load_embedded_languages() -> HashMap<String, Language> {
    let embedded = [
        embed_language_config!("en", "../../configs/languages/english.toml"),
        embed_language_config!("es", "../../configs/languages/spanish.toml"),
        embed_language_config!("zh-classical", "../../configs/languages/classical_chinese.toml"),
        embed_language_config!("ja", "../../configs/languages/japanese.toml"),
        embed_language_config!("ko", "../../configs/languages/korean.toml"),
    ];

    let mut languages = HashMap::new();
    for (code, toml_content) in embedded {
        match Language::from_toml_str(toml_content) {
            Ok(language) if language.code() == code => {
                languages.insert(code.to_string(), language);
            }
            Ok(language) => {
                log::warn!(
                    "Config code mismatch: expected {code}, got {}",
                    language.code()
                );
            }
            Err(e) => {
                log::warn!("Failed to load {code} config: {e}");
            }
        }
    }

    languages
}

/// Look up a built-in language by code
pub fn get_language(code: &str) -> Result<&'static Language> {
    LANGUAGES
        .get_or_init(load_embedded_languages)
        .get(code)
        .ok_or_else(|| Error::UnsupportedLanguage(code.to_string()))
}

/// Codes of all built-in languages, sorted
pub fn list_languages() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = LANGUAGES
        .get_or_init(load_embedded_languages)
        .keys()
        .map(|s| s.as_str())
        .collect();
    codes.sort_unstable();
    codes
}
