//! Korean parsing through MeCab with a Korean dictionary

use std::sync::{Arc, OnceLock};

use crate::error::Result;
use crate::language::Language;
use crate::parser::mecab::{AvailabilityProbe, MecabAnalyzer, MecabSettings};
use crate::parser::Parser;
use crate::token::Token;

/// Environment variable naming the mecab-ko-dic directory
pub const KOREAN_DICDIR_VAR: &str = "MECAB_DICDIR_KO";

fn shared_probe() -> Arc<AvailabilityProbe> {
    static PROBE: OnceLock<Arc<AvailabilityProbe>> = OnceLock::new();
    PROBE.get_or_init(Default::default).clone()
}

/// Korean parser.
///
/// Only supported when MeCab can be started; set `MECAB_PATH` to the
/// executable and `MECAB_DICDIR_KO` to the dictionary if they are not found
/// automatically. Settings are re-read on every call, and support is
/// re-probed whenever they change.
#[derive(Debug, Clone)]
pub struct KoreanParser {
    analyzer: MecabAnalyzer,
}

impl KoreanParser {
    pub fn new() -> Self {
        Self {
            analyzer: MecabAnalyzer::from_env(KOREAN_DICDIR_VAR, shared_probe()),
        }
    }

    /// Use fixed analyzer settings instead of the environment
    pub fn with_settings(settings: MecabSettings) -> Self {
        Self {
            analyzer: MecabAnalyzer::with_settings(KOREAN_DICDIR_VAR, settings),
        }
    }
}

impl Default for KoreanParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for KoreanParser {
    fn is_supported(&self) -> bool {
        self.analyzer.is_supported()
    }

    fn name(&self) -> &'static str {
        "Korean"
    }

    fn get_parsed_tokens(&self, text: &str, language: &Language) -> Result<Vec<Token>> {
        self.analyzer.parse_tokens(text, language)
    }

    /// Readings are not derivable from the Korean analyzer output
    fn get_reading(&self, _text: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::language::get_language;

    fn missing() -> KoreanParser {
        KoreanParser::with_settings(
            MecabSettings::new().with_program("/nonexistent/glossa/mecab"),
        )
    }

    #[test]
    fn test_name() {
        assert_eq!(KoreanParser::new().name(), "Korean");
    }

    #[test]
    fn test_reading_is_always_none() {
        let parser = missing();
        assert_eq!(parser.get_reading("안녕하세요").unwrap(), None);
        assert_eq!(parser.get_reading("").unwrap(), None);
    }

    #[test]
    fn test_unsupported_when_analyzer_missing() {
        assert!(!missing().is_supported());
    }

    #[test]
    fn test_parse_fails_fast_when_analyzer_missing() {
        let language = get_language("ko").unwrap();
        let result = missing().get_parsed_tokens("안녕하세요", language);
        assert!(matches!(result, Err(Error::AnalyzerSpawn { .. })));
    }
}
