//! MeCab-backed parsers driven by stand-in analyzer scripts
//!
//! The scripts speak the same stdin/stdout protocol as MeCab with the
//! formats the parsers request, including the stray `0\t4` line MeCab
//! sometimes prints before the end-of-paragraph marker.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use glossa_core::{
    get_language, Error, JapaneseParser, KoreanParser, MecabSettings, Parser, ParserImpl,
    ReadingStyle, Token,
};

const TOKENS_SCRIPT: &str = r#"#!/bin/sh
echo "fake-mecab: loading dictionary" >&2
while IFS= read -r line; do
  case "$line" in
    '안녕하세요._반가워요')
      printf '안녕\t2\t1\n하\t2\t2\n세요\t2\t3\n.\t3\t4\n_\t3\t5\n반가워요\t2\t1\n' ;;
    '') ;;
    *) printf '%s\t2\t1\n' "$line" ;;
  esac
  printf '0\t4\nEOP\t3\t7\n'
done
"#;

const FAILING_SCRIPT: &str = r#"#!/bin/sh
echo "fake-mecab: no dictionary found" >&2
exit 1
"#;

const READING_SCRIPT: &str = r#"#!/bin/sh
while IFS= read -r line; do
  case "$line" in
    '日本語') printf 'ニホンゴ\n' ;;
    *) printf '%s\n' "$line" ;;
  esac
done
"#;

struct Fakes {
    tokens: PathBuf,
    failing: PathBuf,
    reading: PathBuf,
}

fn install(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    let mut permissions = fs::metadata(&path).unwrap().permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(&path, permissions).unwrap();
    path
}

/// Scripts are written once, before any test spawns a process
fn fakes() -> &'static Fakes {
    static FAKES: OnceLock<Fakes> = OnceLock::new();
    FAKES.get_or_init(|| {
        let dir = Path::new(env!("CARGO_TARGET_TMPDIR")).join("glossa-fake-analyzers");
        fs::create_dir_all(&dir).unwrap();
        Fakes {
            tokens: install(&dir, "mecab-tokens", TOKENS_SCRIPT),
            failing: install(&dir, "mecab-failing", FAILING_SCRIPT),
            reading: install(&dir, "mecab-reading", READING_SCRIPT),
        }
    })
}

fn korean_with(program: &Path) -> KoreanParser {
    KoreanParser::with_settings(MecabSettings::new().with_program(program))
}

fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text()).collect()
}

#[test]
fn test_supported_with_working_analyzer() {
    let parser = korean_with(&fakes().tokens);
    assert!(parser.is_supported());
    assert!(parser.is_supported());
}

#[test]
fn test_unsupported_with_failing_analyzer() {
    let parser = korean_with(&fakes().failing);
    assert!(!parser.is_supported());
}

#[test]
fn test_sentence_example() {
    let language = get_language("ko").unwrap();
    let tokens = korean_with(&fakes().tokens)
        .get_parsed_tokens("안녕하세요. 반가워요", language)
        .unwrap();

    assert_eq!(
        texts(&tokens),
        vec!["안녕", "하", "세요", ".", " ", "반가워요", "¶"]
    );
    assert!(tokens[3].is_sentence_end());
    assert!(!tokens[3].is_word());
    assert!(!tokens[4].is_word());
    assert!(tokens[5].is_word());
    assert!(!tokens[5].is_sentence_end());
    assert_eq!(tokens[6], Token::paragraph());
}

#[test]
fn test_two_field_noise_is_dropped() {
    let language = get_language("ko").unwrap();
    let tokens = korean_with(&fakes().tokens)
        .get_parsed_tokens("줄", language)
        .unwrap();
    assert_eq!(
        tokens,
        vec![Token::new("줄", true, false), Token::paragraph()]
    );
}

#[test]
fn test_lines_analyzed_in_order() {
    let language = get_language("ko").unwrap();
    let tokens = korean_with(&fakes().tokens)
        .get_parsed_tokens("줄1\n줄2", language)
        .unwrap();
    assert_eq!(texts(&tokens), vec!["줄1", "¶", "줄2", "¶"]);
}

#[test]
fn test_empty_line_yields_paragraph_only() {
    let language = get_language("ko").unwrap();
    let tokens = korean_with(&fakes().tokens)
        .get_parsed_tokens("가\n\n나", language)
        .unwrap();
    assert_eq!(texts(&tokens), vec!["가", "¶", "¶", "나", "¶"]);
}

#[test]
fn test_spaces_survive_as_one_surface() {
    let language = get_language("ko").unwrap();
    let tokens = korean_with(&fakes().tokens)
        .get_parsed_tokens("  가   나 ", language)
        .unwrap();
    assert_eq!(texts(&tokens), vec!["가 나", "¶"]);
}

#[test]
fn test_failing_analyzer_reports_diagnostics() {
    let language = get_language("ko").unwrap();
    match korean_with(&fakes().failing).get_parsed_tokens("가", language) {
        Err(Error::AnalyzerFailed { stderr, .. }) => {
            assert!(stderr.contains("no dictionary found"));
        }
        other => panic!("Expected AnalyzerFailed, got {other:?}"),
    }
}

#[test]
fn test_dispatch_through_parser_impl() {
    let language = get_language("ko").unwrap();
    let parser = ParserImpl::Korean(korean_with(&fakes().tokens));
    assert!(parser.is_supported());
    assert_eq!(parser.name(), "Korean");
    assert_eq!(parser.get_reading("가").unwrap(), None);
    let tokens = parser.get_parsed_tokens("가", language).unwrap();
    assert_eq!(texts(&tokens), vec!["가", "¶"]);
}

#[test]
fn test_japanese_tokens_share_protocol() {
    let language = get_language("ja").unwrap();
    let parser = JapaneseParser::with_settings(MecabSettings::new().with_program(&fakes().tokens));
    let tokens = parser.get_parsed_tokens("元気です", language).unwrap();
    assert_eq!(texts(&tokens), vec!["元気です", "¶"]);
}

#[test]
fn test_japanese_reading_hiragana() {
    let parser = JapaneseParser::with_settings(MecabSettings::new().with_program(&fakes().reading));
    assert_eq!(
        parser.get_reading("日本語").unwrap(),
        Some("にほんご".to_string())
    );
}

#[test]
fn test_japanese_reading_katakana() {
    let parser = JapaneseParser::with_settings(MecabSettings::new().with_program(&fakes().reading))
        .with_reading_style(ReadingStyle::Katakana);
    assert_eq!(
        parser.get_reading("日本語").unwrap(),
        Some("ニホンゴ".to_string())
    );
}

#[test]
fn test_japanese_reading_equal_to_text_is_none() {
    let parser = JapaneseParser::with_settings(MecabSettings::new().with_program(&fakes().reading));
    assert_eq!(parser.get_reading("ニホンゴ").unwrap(), None);
}
