//! Output formatting module

use anyhow::Result;
use glossa_core::Token;
use serde::Serialize;

/// Tokens parsed from one input
#[derive(Debug, Clone, Serialize)]
pub struct ParsedDocument {
    /// File path, or `<text>` for inline text
    pub source: String,
    /// Pronunciation hint, when requested and available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
    pub tokens: Vec<Token>,
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output one parsed document
    fn format_document(&mut self, document: &ParsedDocument) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod sentences;
pub mod text;

pub use json::JsonFormatter;
pub use sentences::SentenceFormatter;
pub use text::TextFormatter;
