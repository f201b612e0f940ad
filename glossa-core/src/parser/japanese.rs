//! Japanese parsing and readings through MeCab

use std::sync::{Arc, OnceLock};

use crate::error::Result;
use crate::language::Language;
use crate::parser::mecab::{AvailabilityProbe, MecabAnalyzer, MecabSettings};
use crate::parser::Parser;
use crate::reading::{is_all_hiragana, katakana_to_hiragana, ReadingStyle};
use crate::token::Token;

/// Environment variable naming the Japanese dictionary directory
pub const JAPANESE_DICDIR_VAR: &str = "MECAB_DICDIR_JA";

fn shared_probe() -> Arc<AvailabilityProbe> {
    static PROBE: OnceLock<Arc<AvailabilityProbe>> = OnceLock::new();
    PROBE.get_or_init(Default::default).clone()
}

/// Japanese parser with kana readings.
///
/// Tokenization follows the same feature protocol as [`KoreanParser`];
/// readings come from the dictionary's reading field.
///
/// [`KoreanParser`]: crate::parser::KoreanParser
#[derive(Debug, Clone)]
pub struct JapaneseParser {
    analyzer: MecabAnalyzer,
    reading_style: ReadingStyle,
}

impl JapaneseParser {
    pub fn new() -> Self {
        Self {
            analyzer: MecabAnalyzer::from_env(JAPANESE_DICDIR_VAR, shared_probe()),
            reading_style: ReadingStyle::default(),
        }
    }

    /// Use fixed analyzer settings instead of the environment
    pub fn with_settings(settings: MecabSettings) -> Self {
        Self {
            analyzer: MecabAnalyzer::with_settings(JAPANESE_DICDIR_VAR, settings),
            reading_style: ReadingStyle::default(),
        }
    }

    pub fn with_reading_style(mut self, style: ReadingStyle) -> Self {
        self.reading_style = style;
        self
    }

    pub fn reading_style(&self) -> ReadingStyle {
        self.reading_style
    }
}

impl Default for JapaneseParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser for JapaneseParser {
    fn is_supported(&self) -> bool {
        self.analyzer.is_supported()
    }

    fn name(&self) -> &'static str {
        "Japanese"
    }

    fn get_parsed_tokens(&self, text: &str, language: &Language) -> Result<Vec<Token>> {
        self.analyzer.parse_tokens(text, language)
    }

    /// Reading of `text`, or `None` when it would repeat the text
    fn get_reading(&self, text: &str) -> Result<Option<String>> {
        if text.trim().is_empty() || is_all_hiragana(text) {
            return Ok(None);
        }

        let katakana = self.analyzer.reading(text)?;
        if katakana.is_empty() || katakana == text {
            return Ok(None);
        }

        Ok(Some(match self.reading_style {
            ReadingStyle::Katakana => katakana,
            ReadingStyle::Hiragana => katakana_to_hiragana(&katakana),
        }))
    }
}
