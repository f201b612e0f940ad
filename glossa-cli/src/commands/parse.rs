//! Parse command implementation

use anyhow::{Context, Result};
use clap::Args;
use glossa_core::{Parser, ParserImpl, ReadingStyle};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::language_source::LanguageSource;
use crate::output::{
    JsonFormatter, OutputFormatter, ParsedDocument, SentenceFormatter, TextFormatter,
};

/// Source label for inline text
const INLINE_SOURCE: &str = "<text>";

/// Arguments for the parse command
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Inline text to parse instead of files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,

    /// Built-in language code
    #[arg(short, long, value_name = "CODE", default_value = "en")]
    pub language: String,

    /// External language configuration file (overrides --language)
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Include a pronunciation reading where the parser provides one
    #[arg(long)]
    pub reading: bool,

    /// Script used for Japanese readings
    #[arg(long, value_enum, default_value = "hiragana")]
    pub reading_style: ReadingStyleArg,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One token per line with word and sentence-end flags
    Text,
    /// JSON array of documents with their tokens
    Json,
    /// Tokens regrouped into one sentence per line
    Sentences,
}

/// Reading scripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReadingStyleArg {
    Hiragana,
    Katakana,
}

impl From<ReadingStyleArg> for ReadingStyle {
    fn from(arg: ReadingStyleArg) -> Self {
        match arg {
            ReadingStyleArg::Hiragana => ReadingStyle::Hiragana,
            ReadingStyleArg::Katakana => ReadingStyle::Katakana,
        }
    }
}

impl ParseArgs {
    /// Execute the parse command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::debug!("Arguments: {self:?}");

        let source = LanguageSource::from_args(&self.language, self.language_config.as_ref());
        log::info!("Using language rules: {}", source.display_name());
        let language = source.load()?;

        let parser = self.select_parser(language.parser());
        if !parser.is_supported() {
            return Err(CliError::ParserUnavailable(parser.name().to_string()).into());
        }

        let mut formatter = self.create_formatter()?;
        for (label, content) in self.collect_inputs()? {
            let tokens = parser
                .get_parsed_tokens(&content, &language)
                .with_context(|| format!("Failed to parse {label}"))?;
            let reading = if self.reading {
                parser
                    .get_reading(&content)
                    .with_context(|| format!("Failed to read {label}"))?
            } else {
                None
            };
            log::info!("{label}: {} tokens", tokens.len());

            formatter.format_document(&ParsedDocument {
                source: label,
                reading,
                tokens,
            })?;
        }
        formatter.finish()
    }

    fn select_parser(&self, parser: ParserImpl) -> ParserImpl {
        match parser {
            ParserImpl::Japanese(japanese) => {
                ParserImpl::Japanese(japanese.with_reading_style(self.reading_style.into()))
            }
            other => other,
        }
    }

    /// (label, content) pairs in the order given
    fn collect_inputs(&self) -> Result<Vec<(String, String)>> {
        if let Some(text) = &self.text {
            return Ok(vec![(INLINE_SOURCE.to_string(), text.clone())]);
        }
        if self.input.is_empty() {
            return Err(CliError::NoInput.into());
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} files to process", files.len());
        files
            .into_iter()
            .map(|path| {
                let content = FileReader::read_text(&path)?;
                Ok((path.display().to_string(), content))
            })
            .collect()
    }

    fn create_formatter(&self) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file {}", path.display())
            })?)),
            None => Box::new(BufWriter::new(io::stdout())),
        };

        Ok(match self.format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
            OutputFormat::Sentences => Box::new(SentenceFormatter::new(writer)),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when running under a test harness.
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}
