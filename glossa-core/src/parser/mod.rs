//! Parser contract and the closed set of parsing strategies
//!
//! Every language names one [`ParserType`]; [`ParserImpl`] holds the matching
//! concrete parser and dispatches the [`Parser`] operations to it.

mod character;
mod japanese;
mod korean;
pub(crate) mod mecab;
mod space_delimited;

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::language::Language;
use crate::token::Token;

pub use character::CharacterParser;
pub use japanese::{JapaneseParser, JAPANESE_DICDIR_VAR};
pub use korean::{KoreanParser, KOREAN_DICDIR_VAR};
pub use mecab::{AvailabilityProbe, MecabSettings, MECAB_PATH_VAR};
pub use space_delimited::SpaceDelimitedParser;

/// Capability set shared by all parsers
pub trait Parser: Send + Sync {
    /// True if the parser can run in the current environment.
    ///
    /// Cheap to call repeatedly; never fails, absence of a dependency is
    /// reported as `false`.
    fn is_supported(&self) -> bool {
        true
    }

    /// Stable display name for selection UIs
    fn name(&self) -> &'static str;

    /// Split `text` into ordered tokens using the rules of `language`
    fn get_parsed_tokens(&self, text: &str, language: &Language) -> Result<Vec<Token>>;

    /// Pronunciation hint for `text`, if the script needs one
    fn get_reading(&self, _text: &str) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Parsing strategy identifiers, as written in language configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParserType {
    SpaceDelimited,
    ClassicalChinese,
    Japanese,
    Korean,
}

impl ParserType {
    /// All strategies, in display order
    pub const ALL: [ParserType; 4] = [
        ParserType::SpaceDelimited,
        ParserType::ClassicalChinese,
        ParserType::Japanese,
        ParserType::Korean,
    ];

    /// Identifier used in configuration files
    pub fn id(&self) -> &'static str {
        match self {
            ParserType::SpaceDelimited => "space_delimited",
            ParserType::ClassicalChinese => "classical_chinese",
            ParserType::Japanese => "japanese",
            ParserType::Korean => "korean",
        }
    }
}

impl FromStr for ParserType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ParserType::ALL
            .into_iter()
            .find(|t| t.id() == s.trim())
            .ok_or_else(|| Error::UnknownParser(s.to_string()))
    }
}

impl fmt::Display for ParserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Concrete parser selected by a [`ParserType`]
#[derive(Debug, Clone)]
pub enum ParserImpl {
    SpaceDelimited(SpaceDelimitedParser),
    ClassicalChinese(CharacterParser),
    Japanese(JapaneseParser),
    Korean(KoreanParser),
}

impl ParserImpl {
    /// Build the default parser for a strategy
    pub fn from_type(parser_type: ParserType) -> Self {
        match parser_type {
            ParserType::SpaceDelimited => ParserImpl::SpaceDelimited(SpaceDelimitedParser),
            ParserType::ClassicalChinese => ParserImpl::ClassicalChinese(CharacterParser),
            ParserType::Japanese => ParserImpl::Japanese(JapaneseParser::new()),
            ParserType::Korean => ParserImpl::Korean(KoreanParser::new()),
        }
    }

    pub fn parser_type(&self) -> ParserType {
        match self {
            ParserImpl::SpaceDelimited(_) => ParserType::SpaceDelimited,
            ParserImpl::ClassicalChinese(_) => ParserType::ClassicalChinese,
            ParserImpl::Japanese(_) => ParserType::Japanese,
            ParserImpl::Korean(_) => ParserType::Korean,
        }
    }

    fn inner(&self) -> &dyn Parser {
        match self {
            ParserImpl::SpaceDelimited(p) => p,
            ParserImpl::ClassicalChinese(p) => p,
            ParserImpl::Japanese(p) => p,
            ParserImpl::Korean(p) => p,
        }
    }
}

impl Parser for ParserImpl {
    fn is_supported(&self) -> bool {
        self.inner().is_supported()
    }

    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn get_parsed_tokens(&self, text: &str, language: &Language) -> Result<Vec<Token>> {
        self.inner().get_parsed_tokens(text, language)
    }

    fn get_reading(&self, text: &str) -> Result<Option<String>> {
        self.inner().get_reading(text)
    }
}

/// Collapse runs of spaces and tabs to one space and trim the ends.
///
/// Line breaks are kept; `\r\n` becomes `\n`.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    let unified = text.replace("\r\n", "\n");
    unified
        .split([' ', '\t'])
        .filter(|piece| !piece.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Look up a parser by its configuration identifier
pub fn get_parser(id: &str) -> Result<ParserImpl> {
    Ok(ParserImpl::from_type(ParserType::from_str(id)?))
}

/// `(id, name)` of every parser usable in this environment
pub fn supported_parsers() -> Vec<(&'static str, &'static str)> {
    ParserType::ALL
        .into_iter()
        .map(ParserImpl::from_type)
        .filter(|p| p.is_supported())
        .map(|p| (p.parser_type().id(), p.name()))
        .collect()
}
