//! Language source management for CLI

use anyhow::{Context, Result};
use glossa_core::{get_language, Language};
use std::borrow::Cow;
use std::path::PathBuf;

/// Source of language rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSource {
    /// Built-in language by code
    BuiltIn(String),
    /// External configuration file
    External(PathBuf),
}

impl LanguageSource {
    /// An external configuration wins over a language code
    pub fn from_args(code: &str, config: Option<&PathBuf>) -> Self {
        match config {
            Some(path) => LanguageSource::External(path.clone()),
            None => LanguageSource::BuiltIn(code.to_string()),
        }
    }

    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(code) => format!("Built-in: {code}"),
            LanguageSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Load and compile the language
    pub fn load(&self) -> Result<Cow<'static, Language>> {
        match self {
            LanguageSource::BuiltIn(code) => Ok(Cow::Borrowed(get_language(code)?)),
            LanguageSource::External(path) => Language::from_toml_file(path)
                .map(Cow::Owned)
                .with_context(|| format!("Failed to load language config {}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_external_config_wins() {
        let path = PathBuf::from("custom.toml");
        let source = LanguageSource::from_args("en", Some(&path));
        assert_eq!(source, LanguageSource::External(path));
        assert_eq!(source.display_name(), "External: custom.toml");
    }

    #[test]
    fn test_builtin_load() {
        let source = LanguageSource::from_args("zh-classical", None);
        assert_eq!(source.display_name(), "Built-in: zh-classical");
        let language = source.load().unwrap();
        assert_eq!(language.name(), "Classical Chinese");
    }

    #[test]
    fn test_builtin_unknown_code() {
        let err = LanguageSource::BuiltIn("xx".to_string()).load().unwrap_err();
        assert!(err.to_string().contains("language 'xx' not supported"));
    }

    #[test]
    fn test_external_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pirate.toml");
        fs::write(
            &path,
            r#"
            [metadata]
            code = "pirate"
            name = "Pirate"
            [parser]
            type = "space_delimited"
            [terminators]
            chars = ["!"]
            [words]
            characters = "a-zA-Z"
            "#,
        )
        .unwrap();

        let language = LanguageSource::External(path).load().unwrap();
        assert_eq!(language.code(), "pirate");
        assert!(language.is_terminator('!'));
    }
}
