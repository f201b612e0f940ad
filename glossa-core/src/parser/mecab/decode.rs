//! Input preparation and feature-line decoding for MeCab output

use crate::language::Language;
use crate::parser::collapse_whitespace;
use crate::token::{Token, PARAGRAPH_MARK};

/// Stands in for spaces while text passes through the analyzer
pub(crate) const SPACE_PLACEHOLDER: char = '_';

/// Surface, class and auxiliary fields of the synthetic end-of-paragraph line
const EOP_SURFACE: &str = "EOP";
const EOP_CLASS: &str = "3";
const EOP_AUX: &str = "7";

/// Character-type codes that carry content words
const WORD_CLASSES: [&str; 4] = ["2", "6", "7", "8"];

/// Collapse whitespace, hide spaces behind the placeholder and split lines.
///
/// MeCab drops newlines and treats a bare space as a delimiter, so every
/// line is analyzed on its own and spaces travel as placeholders.
pub(crate) fn prepare_lines(text: &str) -> Vec<String> {
    let normalized: String = collapse_whitespace(text)
        .chars()
        .map(|ch| if ch == ' ' { SPACE_PLACEHOLDER } else { ch })
        .collect();
    normalized.split('\n').map(str::to_string).collect()
}

/// One decoded `surface\tclass\taux` line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FeatureLine<'a> {
    pub surface: &'a str,
    pub class: &'a str,
    pub aux: &'a str,
}

impl<'a> FeatureLine<'a> {
    /// Decode one output line; anything but exactly three fields is rejected
    pub fn parse(line: &'a str) -> Option<Self> {
        let mut fields = line.split('\t');
        let surface = fields.next()?;
        let class = fields.next()?;
        let aux = fields.next()?;
        if fields.next().is_some() || surface.is_empty() {
            return None;
        }
        Some(Self {
            surface,
            class,
            aux,
        })
    }

    pub fn is_paragraph_end(&self) -> bool {
        self.surface == EOP_SURFACE && self.class == EOP_CLASS && self.aux == EOP_AUX
    }

    pub fn is_word(&self) -> bool {
        WORD_CLASSES.contains(&self.class)
    }

    pub fn into_token(self, language: &Language) -> Token {
        if self.is_paragraph_end() {
            return Token::new(PARAGRAPH_MARK, false, true);
        }
        let is_sentence_end = language.is_sentence_terminator(self.surface);
        let text = self.surface.replace(SPACE_PLACEHOLDER, " ");
        Token::new(text, self.is_word(), is_sentence_end)
    }
}

/// Turn raw analyzer output into tokens, in output order.
///
/// Blank lines and lines that do not have exactly three fields are dropped:
/// the analyzer occasionally emits a stray two-field line (`0\t4`) right
/// before the end-of-paragraph marker.
pub(crate) fn decode_output(output: &str, language: &Language) -> Vec<Token> {
    let mut dropped = 0usize;
    let tokens: Vec<Token> = output
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let parsed = FeatureLine::parse(line);
            if parsed.is_none() {
                dropped += 1;
            }
            parsed
        })
        .map(|feature| feature.into_token(language))
        .collect();

    if dropped > 0 {
        log::trace!("dropped {dropped} malformed analyzer line(s)");
    }
    tokens
}
