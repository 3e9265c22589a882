//! Plain-text console report

use super::{clause_sections, OutputFormatter};
use anyhow::Result;
use clausal_engine::AnnotationRecord;
use std::io::Write;

/// Per-sentence listing of found clauses
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &AnnotationRecord) -> Result<()> {
        writeln!(self.writer, "Sentence {}: {}", record.index, record.sentence)?;

        for (title, clauses) in clause_sections(record) {
            if clauses.is_empty() {
                writeln!(self.writer, "  {title}: None")?;
                continue;
            }
            writeln!(self.writer, "  {title}:")?;
            for clause in clauses {
                writeln!(self.writer, "    - {clause}")?;
            }
        }

        writeln!(self.writer, "\n{}\n", "-".repeat(50))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
