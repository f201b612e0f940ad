//! Language-aware text segmentation
//!
//! This crate turns raw text in a supported language into an ordered
//! sequence of [`Token`]s: words, punctuation runs, sentence ends and
//! paragraph markers. The strategy used for a language is selected by its
//! configuration:
//!
//! - **space_delimited**: whitespace-separated scripts (English, Spanish, ...)
//! - **classical_chinese**: one token per character
//! - **japanese** / **korean**: morphological analysis through an external
//!   MeCab process
//!
//! # Example
//!
//! ```rust
//! use glossa_core::{get_language, Parser};
//!
//! let language = get_language("en").unwrap();
//! let parser = language.parser();
//!
//! let tokens = parser.get_parsed_tokens("Hello there. Bye.", language).unwrap();
//! let words: Vec<&str> = tokens
//!     .iter()
//!     .filter(|t| t.is_word())
//!     .map(|t| t.text())
//!     .collect();
//! assert_eq!(words, vec!["Hello", "there", "Bye"]);
//! ```

pub mod error;
pub mod language;
pub mod parser;
pub mod reading;
pub mod token;

pub use error::{Error, Result};
pub use language::{get_language, list_languages, Language, LanguageConfig};
pub use parser::{
    get_parser, supported_parsers, AvailabilityProbe, CharacterParser, JapaneseParser,
    KoreanParser, MecabSettings, Parser, ParserImpl, ParserType, SpaceDelimitedParser,
    JAPANESE_DICDIR_VAR, KOREAN_DICDIR_VAR, MECAB_PATH_VAR,
};
pub use reading::ReadingStyle;
pub use token::{Token, PARAGRAPH_MARK};
