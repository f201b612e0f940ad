//! Glossa command-line entry point

use clap::Parser;
use glossa_cli::commands::Commands;

/// Split text into words, punctuation and sentence boundaries
#[derive(Debug, Parser)]
#[command(name = "glossa", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_subcommand_arguments() {
        let cli = Cli::try_parse_from(["glossa", "parse", "-t", "Hello.", "-l", "en"]).unwrap();
        assert!(matches!(cli.command, Commands::Parse(_)));
    }
}
