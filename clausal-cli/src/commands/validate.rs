//! Validate command implementation

use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use clausal_core::Lexicon;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the lexicon file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub lexicon: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating lexicon: {}", self.lexicon.display());

        match Lexicon::from_file(&self.lexicon) {
            Ok(lexicon) => {
                println!("✓ Lexicon is valid!");
                println!("  Code: {}", lexicon.code());
                println!("  Name: {}", lexicon.name());
                println!("  Conjunctions: {}", lexicon.conjunctions().len());
                println!("  Trigger verbs: {}", lexicon.trigger_verbs().len());
                println!("  Appositive nouns: {}", lexicon.appositive_nouns().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Lexicon is invalid!");
                println!("  Error: {e}");
                Err(CliError::InvalidLexicon(e.to_string()).into())
            }
        }
    }
}
