//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod list;
pub mod parse;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text into tokens
    Parse(parse::ParseArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in languages
    Languages,

    /// List parser strategies and whether they can run here
    Parsers,
}

impl Commands {
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Parse(args) => args.execute(),
            Commands::List { subcommand } => {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                match subcommand {
                    ListCommands::Languages => list::write_languages(&mut out),
                    ListCommands::Parsers => list::write_parsers(&mut out),
                }
            }
        }
    }
}
