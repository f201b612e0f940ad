//! JSON output formatter

use super::{OutputFormatter, ParsedDocument};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs documents as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<ParsedDocument>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, document: &ParsedDocument) -> Result<()> {
        self.documents.push(document.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
