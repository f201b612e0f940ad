//! Token model produced by every parser

use serde::{Deserialize, Serialize};

/// Glyph standing in for a paragraph boundary
pub const PARAGRAPH_MARK: &str = "¶";

/// One unit of parsed text
///
/// Tokens are immutable once built. The `text` is never empty and never
/// carries the placeholder encodings parsers use internally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    text: String,
    is_word: bool,
    is_sentence_end: bool,
}

impl Token {
    /// Create a new token
    pub fn new(text: impl Into<String>, is_word: bool, is_sentence_end: bool) -> Self {
        let text = text.into();
        debug_assert!(!text.is_empty(), "tokens must not be empty");
        Self {
            text,
            is_word,
            is_sentence_end,
        }
    }

    /// A paragraph boundary: not a word, always ends a sentence
    pub fn paragraph() -> Self {
        Self::new(PARAGRAPH_MARK, false, true)
    }

    /// Surface form
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True for word-class units
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// True if this token terminates a sentence or marks a paragraph
    pub fn is_sentence_end(&self) -> bool {
        self.is_sentence_end
    }

    /// True for the paragraph boundary glyph
    pub fn is_paragraph(&self) -> bool {
        self.text == PARAGRAPH_MARK && !self.is_word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_token() {
        let token = Token::paragraph();
        assert_eq!(token.text(), "¶");
        assert!(!token.is_word());
        assert!(token.is_sentence_end());
        assert!(token.is_paragraph());
    }

    #[test]
    fn test_word_is_not_paragraph() {
        let token = Token::new("¶", true, false);
        assert!(!token.is_paragraph());
    }

    #[test]
    fn test_serialize_json() {
        let token = Token::new("word", true, false);
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"text":"word","is_word":true,"is_sentence_end":false}"#);
    }
}
