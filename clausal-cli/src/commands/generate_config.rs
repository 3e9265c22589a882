//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Which template to write
    #[arg(short, long, value_enum, default_value = "lexicon")]
    pub kind: TemplateKind,

    /// Lexicon code written into a lexicon template
    #[arg(long, value_name = "CODE", default_value = "custom")]
    pub code: String,
}

/// Available templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TemplateKind {
    /// Lexicon with conjunctions, trigger verbs and appositive nouns
    Lexicon,
    /// Settings file for the annotate command
    Settings,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating {:?} template...", self.kind);
        println!("  Output file: {}", self.output.display());

        let template = match self.kind {
            TemplateKind::Lexicon => self.lexicon_template(),
            TemplateKind::Settings => settings_template()?,
        };

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Template generated successfully!");
        println!();
        println!("Next steps:");
        match self.kind {
            TemplateKind::Lexicon => {
                println!("1. Edit the word lists");
                println!("2. Validate the lexicon:");
                println!("   clausal validate --lexicon {}", self.output.display());
                println!("3. Use it for annotation:");
                println!(
                    "   clausal annotate -i data.jsonl --lexicon {}",
                    self.output.display()
                );
            }
            TemplateKind::Settings => {
                println!("1. Adjust sizes, output and performance settings");
                println!("2. Use it for annotation:");
                println!(
                    "   clausal annotate -i data.jsonl -c {}",
                    self.output.display()
                );
            }
        }

        Ok(())
    }

    /// Lexicon template content
    fn lexicon_template(&self) -> String {
        format!(
            r#"# Clause lexicon: {code}

[metadata]
code = "{code}"
name = "Custom Lexicon"

# Subordinating conjunctions that open adverbial clauses.
# Multi-word entries are matched token by token, longest first.
[conjunctions]
entries = ["because", "although", "when", "if", "even though", "so that"]

# Verbs (lemma form) whose object may be a noun clause
[trigger_verbs]
entries = ["say", "think", "know", "believe", "report"]

# Abstract nouns (lemma form) that take an appositive "that"-clause
[appositive_nouns]
entries = ["fact", "belief", "idea", "claim"]

# Extra known lemmas so inflected forms resolve (optional)
[lemmas]
verbs = ["be", "have"]
nouns = []

# Irregular inflections (optional)
[exceptions.verbs]
said = "say"
thought = "think"
knew = "know"

[exceptions.nouns]
"#,
            code = self.code
        )
    }
}

/// Settings template: the default configuration, annotated
fn settings_template() -> Result<String> {
    let body = CliConfig::default().to_toml()?;
    Ok(format!(
        "# Settings for `clausal annotate`; command-line flags take precedence\n\n{body}"
    ))
}
