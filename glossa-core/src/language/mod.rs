//! Per-language parsing rules
//!
//! Languages are described by TOML configurations ([`LanguageConfig`]) and
//! compiled once into an immutable [`Language`] that parsers borrow.

pub(crate) mod config;
pub(crate) mod loader;
mod runtime;

pub use config::{
    LanguageConfig, MetadataConfig, ParserConfig, SubstitutionConfig, SubstitutionPair,
    TerminatorConfig, WordConfig,
};
pub use loader::{get_language, list_languages};
pub use runtime::Language;
