//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod annotate;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Annotate tagged sentences with attributive, noun and adverbial clauses
    Annotate(annotate::AnnotateArgs),

    /// Validate a lexicon file
    Validate(validate::ValidateArgs),

    /// Write a lexicon or settings template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available output formats
    Formats,

    /// List embedded lexicons
    Lexicons,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Annotate(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

impl ListCommands {
    fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Formats => vec![
                "Available output formats:".to_string(),
                "  text      - Per-sentence clause report".to_string(),
                "  json      - JSON array of annotation records".to_string(),
                "  markdown  - Markdown report".to_string(),
            ],
            ListCommands::Lexicons => std::iter::once("Embedded lexicons:".to_string())
                .chain(
                    clausal_core::lexicon::available_lexicons()
                        .iter()
                        .map(|(code, name)| format!("  {code:<9} - {name}")),
                )
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_formats() {
        let lines = ListCommands::Formats.lines();
        assert!(lines.iter().any(|line| line.contains("json")));
        assert!(lines.iter().any(|line| line.contains("markdown")));
    }

    #[test]
    fn test_list_lexicons() {
        let lines = ListCommands::Lexicons.lines();
        assert_eq!(lines[1], "  en        - English");
    }
}
