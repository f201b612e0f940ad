//! List command implementation

use anyhow::Result;
use glossa_core::{get_language, list_languages, Parser, ParserImpl, ParserType};
use std::io::Write;

/// One line per built-in language: code, name, parser strategy
pub fn write_languages(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Available languages:")?;
    for code in list_languages() {
        let language = get_language(code)?;
        writeln!(
            out,
            "  {:<14} {:<18} {}",
            language.code(),
            language.name(),
            language.parser_type()
        )?;
    }
    Ok(())
}

/// One line per parser strategy with its availability
pub fn write_parsers(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Available parsers:")?;
    for parser_type in ParserType::ALL {
        let parser = ParserImpl::from_type(parser_type);
        let status = if parser.is_supported() {
            "available"
        } else {
            "unavailable"
        };
        writeln!(
            out,
            "  {:<16} {:<18} {}",
            parser_type.id(),
            parser.name(),
            status
        )?;
    }
    Ok(())
}
