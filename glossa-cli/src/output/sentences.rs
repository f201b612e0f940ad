//! Sentence output formatter

use super::{OutputFormatter, ParsedDocument};
use anyhow::Result;
use glossa_core::Token;
use std::io::Write;

/// Sentence formatter - regroups tokens into one sentence per line
pub struct SentenceFormatter<W: Write> {
    writer: W,
}

impl<W: Write> SentenceFormatter<W> {
    /// Create a new sentence formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

/// Split tokens after every sentence end, dropping paragraph markers
pub fn sentences(tokens: &[Token]) -> Vec<String> {
    let mut result = Vec::new();
    let mut current = String::new();
    for token in tokens {
        if !token.is_paragraph() {
            current.push_str(token.text());
        }
        if token.is_sentence_end() {
            let sentence = current.trim();
            if !sentence.is_empty() {
                result.push(sentence.to_string());
            }
            current.clear();
        }
    }
    let rest = current.trim();
    if !rest.is_empty() {
        result.push(rest.to_string());
    }
    result
}

impl<W: Write> OutputFormatter for SentenceFormatter<W> {
    fn format_document(&mut self, document: &ParsedDocument) -> Result<()> {
        for sentence in sentences(&document.tokens) {
            writeln!(self.writer, "{sentence}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_split_on_ends() {
        let tokens = vec![
            Token::new("Hi", true, false),
            Token::new(". ", false, true),
            Token::new("Bye", true, false),
            Token::paragraph(),
            Token::paragraph(),
            Token::new("Tail", true, false),
        ];
        assert_eq!(sentences(&tokens), vec!["Hi.", "Bye", "Tail"]);
    }

    #[test]
    fn test_empty_tokens() {
        assert!(sentences(&[]).is_empty());
    }
}
