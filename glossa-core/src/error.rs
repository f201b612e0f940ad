//! Error types for parsing and configuration

use std::process::ExitStatus;
use thiserror::Error;

/// Errors raised while loading languages or parsing text
#[derive(Debug, Error)]
pub enum Error {
    /// No language is registered under the code
    #[error("language '{0}' not supported")]
    UnsupportedLanguage(String),

    /// The parser type names no known strategy
    #[error("unknown parser type: {0}")]
    UnknownParser(String),

    /// Invalid or undecodable language configuration
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A configured pattern failed to compile
    #[error("invalid {field} pattern: {source}")]
    InvalidPattern {
        /// The configuration field holding the pattern
        field: &'static str,
        /// The underlying regex error
        source: regex::Error,
    },

    /// The analyzer process could not be started
    #[error("failed to start analyzer '{program}': {source}")]
    AnalyzerSpawn {
        /// Program that was executed
        program: String,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Talking to a running analyzer failed
    #[error("analyzer I/O error: {0}")]
    AnalyzerIo(#[from] std::io::Error),

    /// The analyzer exited unsuccessfully
    #[error("analyzer exited with {status}: {stderr}")]
    AnalyzerFailed {
        /// Exit status of the analyzer process
        status: ExitStatus,
        /// Captured diagnostic output
        stderr: String,
    },

    /// Analyzer output was not valid UTF-8
    #[error("encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Result type for glossa operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_language_display() {
        let error = Error::UnsupportedLanguage("xx".to_string());
        assert_eq!(error.to_string(), "language 'xx' not supported");
    }

    #[test]
    fn test_invalid_pattern_display() {
        let source = regex::Regex::new("[").unwrap_err();
        let error = Error::InvalidPattern {
            field: "word character",
            source,
        };
        assert!(error.to_string().starts_with("invalid word character pattern:"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let error: Error = io.into();
        assert!(matches!(error, Error::AnalyzerIo(_)));
        assert!(error.to_string().contains("pipe closed"));
    }
}
