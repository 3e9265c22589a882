//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use clausal_engine::AnnotationRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;

/// Writes all records as one pretty-printed JSON array
///
/// Non-ASCII text is written as is, never escaped.
pub struct JsonFormatter<W: Write> {
    writer: W,
    indent: Vec<u8>,
    records: Vec<AnnotationRecord>,
}

impl<W: Write> JsonFormatter<W> {
    /// Formatter indenting with four spaces
    pub fn new(writer: W) -> Self {
        Self::with_indent(writer, 4)
    }

    /// Formatter indenting with `spaces` spaces per level
    pub fn with_indent(writer: W, spaces: usize) -> Self {
        Self {
            writer,
            indent: vec![b' '; spaces],
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_record(&mut self, record: &AnnotationRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let formatter = PrettyFormatter::with_indent(&self.indent);
        let mut serializer = serde_json::Serializer::with_formatter(&mut self.writer, formatter);
        self.records.serialize(&mut serializer)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
