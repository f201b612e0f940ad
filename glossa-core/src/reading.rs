//! Kana helpers for pronunciation readings

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Script a Japanese reading is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadingStyle {
    #[default]
    Hiragana,
    Katakana,
}

impl FromStr for ReadingStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hiragana" => Ok(ReadingStyle::Hiragana),
            "katakana" => Ok(ReadingStyle::Katakana),
            other => Err(Error::Configuration(format!(
                "unknown reading style: {other}"
            ))),
        }
    }
}

impl fmt::Display for ReadingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadingStyle::Hiragana => write!(f, "hiragana"),
            ReadingStyle::Katakana => write!(f, "katakana"),
        }
    }
}

// ァ..ヶ map onto ぁ..ゖ by a fixed offset; ヽヾ onto ゝゞ likewise.
const KATAKANA_OFFSET: u32 = 0x60;

/// Convert katakana to hiragana, leaving everything else untouched
pub fn katakana_to_hiragana(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            'ァ'..='ヶ' | 'ヽ' | 'ヾ' => {
                char::from_u32(ch as u32 - KATAKANA_OFFSET).unwrap_or(ch)
            }
            _ => ch,
        })
        .collect()
}

/// True if `text` is non-empty and written only in hiragana
pub fn is_all_hiragana(text: &str) -> bool {
    !text.is_empty()
        && text
            .chars()
            .all(|ch| matches!(ch, 'ぁ'..='ゖ' | 'ゝ' | 'ゞ' | 'ー'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_katakana_to_hiragana() {
        assert_eq!(katakana_to_hiragana("ニホンゴ"), "にほんご");
        assert_eq!(katakana_to_hiragana("ヴァイオリン"), "ゔぁいおりん");
        assert_eq!(katakana_to_hiragana("トーキョー"), "とーきょー");
    }

    #[test]
    fn test_katakana_to_hiragana_leaves_other_scripts() {
        assert_eq!(katakana_to_hiragana("漢字とABC"), "漢字とABC");
    }

    #[test]
    fn test_is_all_hiragana() {
        assert!(is_all_hiragana("ひらがな"));
        assert!(is_all_hiragana("すーぱー"));
        assert!(!is_all_hiragana("カタカナ"));
        assert!(!is_all_hiragana("ひら仮名"));
        assert!(!is_all_hiragana(""));
    }

    #[test]
    fn test_reading_style_from_str() {
        assert_eq!(
            "Katakana".parse::<ReadingStyle>().unwrap(),
            ReadingStyle::Katakana
        );
        assert_eq!(ReadingStyle::default(), ReadingStyle::Hiragana);
        assert!("romaji".parse::<ReadingStyle>().is_err());
    }
}
