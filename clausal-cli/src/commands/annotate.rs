//! Annotate command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use clausal_core::Lexicon;
use clausal_engine::{AnnotationProcessorBuilder, Batch, ExecutionMode, InputFormat};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Arguments for the annotate command
#[derive(Debug, Args)]
pub struct AnnotateArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true, num_args = 1..)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Input layout (default: detected per file)
    #[arg(long, value_enum)]
    pub input_format: Option<InputLayout>,

    /// Number of leading sentences considered
    #[arg(long, value_name = "N")]
    pub sample_size: Option<usize>,

    /// Stop after this many annotated sentences
    #[arg(long = "target", value_name = "N")]
    pub target_size: Option<usize>,

    /// External lexicon file (TOML)
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "CLAUSAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Annotate sentences in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel mode
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Console report listing the clauses of each sentence
    Text,
    /// JSON array of annotation records
    Json,
    /// Markdown report
    Markdown,
}

impl OutputFormat {
    fn from_name(name: &str) -> Result<Self> {
        match name {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" => Ok(OutputFormat::Markdown),
            other => Err(CliError::ConfigError(format!("unknown output format '{other}'")).into()),
        }
    }
}

/// Supported input layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputLayout {
    /// `{"words": [...], "labels": [...]}` records, one per line or in an array
    Jsonl,
    /// One sentence of `word/TAG` tokens per line
    Tagged,
}

impl From<InputLayout> for InputFormat {
    fn from(layout: InputLayout) -> Self {
        match layout {
            InputLayout::Jsonl => InputFormat::Jsonl,
            InputLayout::Tagged => InputFormat::Tagged,
        }
    }
}

impl AnnotateArgs {
    /// Execute the annotate command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting clause annotation");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let files = resolve_patterns(&self.input)?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let layout = self.input_format.map(InputFormat::from);
        let mut sentences = Vec::new();
        for path in &files {
            let decoded = FileReader::read_sentences(path, layout)?;
            progress.file_completed(&path.display().to_string(), decoded.len());
            sentences.extend(decoded);
        }
        log::info!(
            "Read {} sentences from {} file(s)",
            sentences.len(),
            files.len()
        );

        let processor = self
            .builder(&config)?
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        progress.annotating(sentences.len());
        let batch = processor
            .process_sentences(&sentences)
            .map_err(|e| CliError::ProcessingError(e.to_string()))?;
        progress.finish(batch.records.len());

        self.write_batch(&batch, &config)?;
        log_stats(&batch);

        Ok(())
    }

    /// Merge flags over the configuration file
    fn builder(&self, config: &CliConfig) -> Result<AnnotationProcessorBuilder> {
        let sample_size = self.sample_size.unwrap_or(config.processing.sample_size);
        let target_size = self.target_size.unwrap_or(config.processing.target_size);
        let parallel = self.parallel || config.performance.parallel;
        let threads = self
            .threads
            .or(Some(config.performance.worker_threads))
            .filter(|&count| count > 0);

        let mut builder = AnnotationProcessorBuilder::new()
            .sample_size(sample_size)
            .target_size(target_size)
            .execution_mode(if parallel {
                ExecutionMode::Parallel
            } else {
                ExecutionMode::Sequential
            })
            .threads(threads);

        if parallel {
            log::debug!(
                "Parallel mode with {} worker thread(s)",
                threads.unwrap_or_else(num_cpus::get)
            );
        }

        if let Some(path) = self.lexicon.as_ref().or(config.processing.lexicon.as_ref()) {
            let lexicon = Lexicon::from_file(path)
                .map_err(|e| CliError::InvalidLexicon(e.to_string()))
                .with_context(|| format!("Failed to load lexicon {}", path.display()))?;
            log::info!("Using lexicon '{}' from {}", lexicon.code(), path.display());
            builder = builder.lexicon(Arc::new(lexicon));
        }

        Ok(builder)
    }

    fn write_batch(&self, batch: &Batch, config: &CliConfig) -> Result<()> {
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&config.output.default_format)?,
        };

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => {
                Box::new(JsonFormatter::with_indent(writer, config.output.json_indent))
            }
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        };

        for record in &batch.records {
            formatter.format_record(record)?;
        }
        formatter.finish()?;

        if let Some(path) = &self.output {
            log::info!("Wrote {} records to {}", batch.records.len(), path.display());
        }
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // Ignore a logger already installed by an embedding caller
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

fn log_stats(batch: &Batch) {
    let stats = &batch.stats;
    log::info!(
        "Sentences read: {}, considered: {}, filtered: {}, without clauses: {}, emitted: {}",
        stats.sentences_read,
        stats.considered,
        stats.filtered,
        stats.without_clauses,
        stats.emitted
    );
}
