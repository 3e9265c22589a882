//! Output formatters for annotation records

use anyhow::Result;
use clausal_engine::AnnotationRecord;

/// Sink for annotated records
pub trait OutputFormatter: Send + Sync {
    /// Emit one record
    fn format_record(&mut self, record: &AnnotationRecord) -> Result<()>;

    /// Flush everything that is still buffered
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Section titles and clause lists of a record, in report order
pub(crate) fn clause_sections(record: &AnnotationRecord) -> [(&'static str, &[String]); 3] {
    [
        ("Attributive Clauses", record.attributive_clauses.as_slice()),
        ("Noun Clauses", record.noun_clauses.as_slice()),
        ("Adverbial Clauses", record.adverbial_clauses.as_slice()),
    ]
}
