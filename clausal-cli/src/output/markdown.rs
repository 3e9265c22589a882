//! Markdown output formatter

use super::{clause_sections, OutputFormatter};
use anyhow::Result;
use clausal_engine::AnnotationRecord;
use std::io::Write;

/// Markdown formatter - one section per annotated sentence
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    record_count: usize,
    clause_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            record_count: 0,
            clause_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_record(&mut self, record: &AnnotationRecord) -> Result<()> {
        self.record_count += 1;
        self.clause_count += record.clause_count();

        writeln!(self.writer, "## Sentence {}", record.index)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "> {}", record.sentence)?;
        writeln!(self.writer)?;

        for (title, clauses) in clause_sections(record) {
            if clauses.is_empty() {
                continue;
            }
            writeln!(self.writer, "**{title}**")?;
            writeln!(self.writer)?;
            for clause in clauses {
                writeln!(self.writer, "- {clause}")?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total sentences: {}, clauses: {}*",
            self.record_count, self.clause_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
