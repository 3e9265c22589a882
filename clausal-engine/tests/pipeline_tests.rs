//! Integration tests for the annotation pipeline

use clausal_engine::*;
use std::io::Write;
use tempfile::NamedTempFile;

const REPORTED: &str =
    r#"{"words": ["He", "said", "that", "he", "was", "tired", "."], "labels": ["PRP", "VBD", "IN", "PRP", "VBD", "JJ", "."]}"#;
const RELATIVE: &str = r#"{"words": ["The", "book", "that", "she", "read", "was", "long", "."], "labels": ["DT", "NN", "WDT", "PRP", "VBD", "VBD", "JJ", "."]}"#;
const PLAIN: &str =
    r#"{"words": ["Dogs", "bark", "."], "labels": ["NNS", "VBP", "."]}"#;
const QUOTED: &str = r#"{"words": ["``", "I", "think", "it", "works", "''", "."], "labels": ["``", "PRP", "VBP", "PRP", "VBZ", "''", "."]}"#;

/// `count` records cycling through annotated, clause-less and filtered lines
fn dataset(count: usize) -> String {
    [REPORTED, PLAIN, RELATIVE, QUOTED]
        .iter()
        .cycle()
        .take(count)
        .copied()
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_early_stop_and_indices() {
    let processor = AnnotationProcessorBuilder::new()
        .target_size(5)
        .build()
        .unwrap();

    let batch = processor
        .process(Input::from_text(dataset(40)), Some(InputFormat::Jsonl))
        .unwrap();

    assert_eq!(batch.records.len(), 5);
    let indices: Vec<usize> = batch.records.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![1, 2, 3, 4, 5]);

    // Two annotated sentences in every block of four
    assert_eq!(batch.stats.sentences_read, 40);
    assert_eq!(batch.stats.considered, 9);
    assert_eq!(batch.stats.emitted, 5);
    assert_eq!(batch.stats.filtered, 2);
    assert_eq!(batch.stats.without_clauses, 2);

    assert_eq!(batch.records[0].noun_clauses, vec!["that he was tired"]);
    assert_eq!(batch.records[1].attributive_clauses, vec!["that she read"]);
}

#[test]
fn test_sample_size_caps_considered_sentences() {
    let processor = AnnotationProcessorBuilder::new()
        .sample_size(6)
        .target_size(100)
        .build()
        .unwrap();

    let batch = processor
        .process(Input::from_text(dataset(40)), None)
        .unwrap();

    assert_eq!(batch.stats.considered, 6);
    assert_eq!(batch.records.len(), 3);
}

#[cfg(feature = "parallel")]
#[test]
fn test_sequential_and_parallel_agree() {
    let sentences = decode_sentences(&dataset(200), InputFormat::Jsonl).unwrap();

    let sequential = AnnotationProcessorBuilder::new()
        .target_size(30)
        .execution_mode(ExecutionMode::Sequential)
        .build()
        .unwrap();
    let parallel = AnnotationProcessorBuilder::new()
        .target_size(30)
        .execution_mode(ExecutionMode::Parallel)
        .threads(Some(3))
        .build()
        .unwrap();

    assert_eq!(parallel.mode(), ExecutionMode::Parallel);
    assert_eq!(
        sequential.process_sentences(&sentences).unwrap(),
        parallel.process_sentences(&sentences).unwrap()
    );
}

#[test]
fn test_file_input_in_tagged_format() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "We/PRP stayed/VBD because/IN it/PRP rained/VBD ./.").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "Dogs/NNS bark/VBP ./.").unwrap();

    let batch = AnnotationProcessor::new()
        .unwrap()
        .process(Input::from_file(file.path()), None)
        .unwrap();

    assert_eq!(batch.stats.sentences_read, 2);
    assert_eq!(batch.records.len(), 1);
    assert_eq!(batch.records[0].adverbial_clauses, vec!["because it rained"]);
    assert_eq!(batch.records[0].sentence, "We stayed because it rained .");
}

#[test]
fn test_records_serialize_with_expected_keys() {
    let batch = AnnotationProcessor::new()
        .unwrap()
        .process(Input::from_text(REPORTED.to_string()), None)
        .unwrap();

    let json = serde_json::to_string(&batch.records).unwrap();
    assert!(json.starts_with(r#"[{"index":1,"sentence":"He said that he was tired .","#));
    assert!(json.contains(r#""noun_clauses":["that he was tired"]"#));
    assert!(json.contains(r#""attributive_clauses":[]"#));
}

#[test]
fn test_decode_error_surfaces() {
    let text = format!("{REPORTED}\n{{\"words\": [\"a\"]}}\n");
    let err = AnnotationProcessor::new()
        .unwrap()
        .process(Input::from_text(text), Some(InputFormat::Jsonl))
        .unwrap_err();

    assert!(matches!(err, EngineError::Decode { line: 2, .. }));
}
