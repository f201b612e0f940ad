//! Runtime form of a language configuration
//!
//! Patterns are compiled once here so parsers never touch raw configuration.

use std::borrow::Cow;
use std::path::Path;
use std::str::FromStr;

use regex::Regex;

use crate::error::{Error, Result};
use crate::language::config::LanguageConfig;
use crate::parser::{ParserImpl, ParserType};

/// Compiled, immutable language rules
#[derive(Debug, Clone)]
pub struct Language {
    code: String,
    name: String,
    parser_type: ParserType,
    terminators: Vec<char>,
    /// Whole-string match of one or more terminators
    terminator_run: Regex,
    word_characters: String,
    /// Exceptions first, then runs of word characters
    word_pattern: Regex,
    substitutions: Vec<(String, String)>,
}

impl Language {
    /// Create from configuration
    pub fn from_config(config: &LanguageConfig) -> Result<Self> {
        config.validate()?;

        let parser_type = ParserType::from_str(&config.parser.parser_type)?;

        let terminator_class: String = config
            .terminators
            .chars
            .iter()
            .map(|c| regex::escape(&c.to_string()))
            .collect();
        let terminator_run = Regex::new(&format!("^[{terminator_class}]+$")).map_err(|source| {
            Error::InvalidPattern {
                field: "sentence terminator",
                source,
            }
        })?;

        let word_characters = config.words.characters.trim().to_string();
        let mut alternatives: Vec<String> = config
            .terminators
            .exceptions
            .iter()
            .filter(|e| !e.is_empty())
            .map(|e| regex::escape(e))
            .collect();
        alternatives.push(format!("[{word_characters}]+"));
        let word_pattern =
            Regex::new(&alternatives.join("|")).map_err(|source| Error::InvalidPattern {
                field: "word character",
                source,
            })?;

        let substitutions = config
            .substitutions
            .pairs
            .iter()
            .map(|p| (p.from.clone(), p.to.clone()))
            .collect();

        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            parser_type,
            terminators: config.terminators.chars.clone(),
            terminator_run,
            word_characters,
            word_pattern,
            substitutions,
        })
    }

    /// Decode and compile a TOML configuration
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config = LanguageConfig::from_toml_str(toml_str)?;
        Self::from_config(&config)
    }

    /// Load a TOML configuration from disk
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parser_type(&self) -> ParserType {
        self.parser_type
    }

    /// The parser this language is configured for
    pub fn parser(&self) -> ParserImpl {
        ParserImpl::from_type(self.parser_type)
    }

    pub fn terminators(&self) -> &[char] {
        &self.terminators
    }

    #[inline]
    pub fn is_terminator(&self, ch: char) -> bool {
        self.terminators.contains(&ch)
    }

    /// True if `text` consists only of sentence terminators
    pub fn is_sentence_terminator(&self, text: &str) -> bool {
        self.terminator_run.is_match(text)
    }

    /// True if any character of `text` is a sentence terminator
    pub fn contains_terminator(&self, text: &str) -> bool {
        text.chars().any(|c| self.is_terminator(c))
    }

    /// Body of the word character class, as configured
    pub fn word_characters(&self) -> &str {
        &self.word_characters
    }

    /// Matches exceptions and maximal runs of word characters
    pub fn word_pattern(&self) -> &Regex {
        &self.word_pattern
    }

    /// True if the single character is a word character
    pub fn is_word_char(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        let s: &str = ch.encode_utf8(&mut buf);
        self.word_pattern
            .find(s)
            .is_some_and(|m| m.start() == 0 && m.end() == s.len())
    }

    /// Apply the configured character substitutions in order
    pub fn apply_substitutions<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut result = Cow::Borrowed(text);
        for (from, to) in &self.substitutions {
            if result.contains(from.as_str()) {
                result = Cow::Owned(result.replace(from.as_str(), to));
            }
        }
        result
    }
}
