//! Plain text output formatter

use super::{OutputFormatter, ParsedDocument};
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - one token per line: kind, sentence flag, text
pub struct TextFormatter<W: Write> {
    writer: W,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: 0,
        }
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, document: &ParsedDocument) -> Result<()> {
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        self.documents += 1;

        writeln!(self.writer, "# {}", document.source)?;
        if let Some(reading) = &document.reading {
            writeln!(self.writer, "# reading: {reading}")?;
        }
        for token in &document.tokens {
            let kind = if token.is_word() { "word" } else { "other" };
            let end = if token.is_sentence_end() { "eos" } else { "-" };
            writeln!(self.writer, "{kind}\t{end}\t{:?}", token.text())?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
