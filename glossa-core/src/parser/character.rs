//! Parser for scripts written without word separators

use crate::error::Result;
use crate::language::Language;
use crate::parser::{collapse_whitespace, Parser};
use crate::token::Token;

/// Emits one token per character.
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterParser;

impl Parser for CharacterParser {
    fn name(&self) -> &'static str {
        "Classical Chinese"
    }

    fn get_parsed_tokens(&self, text: &str, language: &Language) -> Result<Vec<Token>> {
        let cleaned = collapse_whitespace(text);
        if cleaned.is_empty() {
            return Ok(Vec::new());
        }

        let mut tokens = Vec::with_capacity(cleaned.len());
        for (i, line) in cleaned.split('\n').enumerate() {
            if i > 0 {
                tokens.push(Token::paragraph());
            }
            tokens.extend(line.chars().map(|ch| {
                Token::new(
                    ch.to_string(),
                    language.is_word_char(ch),
                    language.is_terminator(ch),
                )
            }));
        }
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::get_language;

    fn parse(text: &str) -> Vec<Token> {
        let language = get_language("zh-classical").unwrap();
        CharacterParser.get_parsed_tokens(text, language).unwrap()
    }

    #[test]
    fn test_one_token_per_character() {
        let tokens = parse("學而時習之。");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["學", "而", "時", "習", "之", "。"]);
        assert!(tokens[..5].iter().all(|t| t.is_word() && !t.is_sentence_end()));
        assert!(!tokens[5].is_word());
        assert!(tokens[5].is_sentence_end());
    }

    #[test]
    fn test_lines_separated_by_paragraph() {
        let tokens = parse("子曰\n不亦說乎");
        assert_eq!(tokens[2], Token::paragraph());
        assert_eq!(tokens.len(), 7);
    }

    #[test]
    fn test_whitespace_collapsed() {
        let tokens = parse("  子 \t 曰  ");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text()).collect();
        assert_eq!(texts, vec!["子", " ", "曰"]);
        assert!(!tokens[1].is_word());
    }

    #[test]
    fn test_empty_text() {
        assert!(parse(" \n ").is_empty());
    }
}
