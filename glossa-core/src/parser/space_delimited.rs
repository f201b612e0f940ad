//! Parser for scripts that separate words with spaces

use crate::error::Result;
use crate::language::Language;
use crate::parser::Parser;
use crate::token::Token;

const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Splits text into runs of word characters and the gaps between them.
///
/// Each newline becomes a paragraph token. A gap ends a sentence when it
/// contains one of the language's terminators; configured exceptions such as
/// `"Mr."` are matched as whole words so their dot never does.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpaceDelimitedParser;

impl SpaceDelimitedParser {
    fn clean(text: &str, language: &Language) -> String {
        let substituted = language.apply_substitutions(text);
        let mut cleaned = String::with_capacity(substituted.len());
        let mut prev_space = false;
        for ch in substituted.replace("\r\n", "\n").chars() {
            match ch {
                ZERO_WIDTH_SPACE => continue,
                ' ' if prev_space => continue,
                _ => {}
            }
            prev_space = ch == ' ';
            cleaned.push(ch);
        }
        cleaned
    }

    fn parse_paragraph(paragraph: &str, language: &Language, tokens: &mut Vec<Token>) {
        let mut pos = 0;
        for word in language.word_pattern().find_iter(paragraph) {
            Self::push_gap(&paragraph[pos..word.start()], language, tokens);
            tokens.push(Token::new(word.as_str(), true, false));
            pos = word.end();
        }
        Self::push_gap(&paragraph[pos..], language, tokens);
    }

    fn push_gap(gap: &str, language: &Language, tokens: &mut Vec<Token>) {
        if !gap.is_empty() {
            tokens.push(Token::new(gap, false, language.contains_terminator(gap)));
        }
    }
}

impl Parser for SpaceDelimitedParser {
    fn name(&self) -> &'static str {
        "Space Delimited"
    }

    fn get_parsed_tokens(&self, text: &str, language: &Language) -> Result<Vec<Token>> {
        let cleaned = Self::clean(text, language);
        let mut tokens = Vec::new();
        for (i, paragraph) in cleaned.split('\n').enumerate() {
            if i > 0 {
                tokens.push(Token::paragraph());
            }
            Self::parse_paragraph(paragraph, language, &mut tokens);
        }
        Ok(tokens)
    }
}
