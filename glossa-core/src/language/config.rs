//! Configuration structures and validation
//!
//! This module defines the TOML schema for language configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Root language configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    pub metadata: MetadataConfig,
    pub parser: ParserConfig,
    pub terminators: TerminatorConfig,
    pub words: WordConfig,
    #[serde(default)]
    pub substitutions: SubstitutionConfig,
}

/// Language metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
}

/// Parser selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    #[serde(rename = "type")]
    pub parser_type: String,
}

/// Sentence terminators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminatorConfig {
    pub chars: Vec<char>,
    /// Words whose trailing terminator never ends a sentence ("Mr.")
    #[serde(default)]
    pub exceptions: Vec<String>,
}

/// Word characters, as the body of a regex character class
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordConfig {
    pub characters: String,
}

/// Character substitutions applied before space-delimited parsing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubstitutionConfig {
    #[serde(default)]
    pub pairs: Vec<SubstitutionPair>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstitutionPair {
    pub from: String,
    pub to: String,
}

impl LanguageConfig {
    /// Decode a configuration from TOML
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| Error::Configuration(e.to_string()))
    }

    /// Validate configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(Error::Configuration("Language code is empty".to_string()));
        }

        if self.terminators.chars.is_empty() {
            return Err(Error::Configuration(
                "No terminator characters defined".to_string(),
            ));
        }

        if self.words.characters.trim().is_empty() {
            return Err(Error::Configuration(
                "No word characters defined".to_string(),
            ));
        }

        if self.substitutions.pairs.iter().any(|p| p.from.is_empty()) {
            return Err(Error::Configuration(
                "Substitution source must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
