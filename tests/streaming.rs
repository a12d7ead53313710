//! Streaming an external producer (file lines) through the protocol

use std::io::{BufRead, BufReader, Write};

use lazyseq::{Cursor, IterCursor, Step};

#[test]
fn test_file_lines_are_batched_lazily() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    write!(file, "line1\nline2\nline3").expect("write temp file");
    let reader = BufReader::new(file.reopen().expect("reopen temp file"));

    let mut batches = IterCursor::new(reader.lines())
        .batched(2)
        .expect("valid batch size");

    let first: Vec<String> = match batches.advance() {
        Step::Value(batch) => batch.into_iter().map(|l| l.expect("read line")).collect(),
        Step::End => panic!("expected a batch"),
    };
    assert_eq!(first, vec!["line1", "line2"]);
    assert_eq!(batches.body().drawn(), 2);

    let second: Vec<String> = match batches.advance() {
        Step::Value(batch) => batch.into_iter().map(|l| l.expect("read line")).collect(),
        Step::End => panic!("expected a batch"),
    };
    assert_eq!(second, vec!["line3"]);
    assert!(batches.advance().is_end());
}

#[test]
fn test_manual_stepping_reports_end_without_error() {
    let mut cursor = IterCursor::new(vec![1, 2, 3]);
    assert_eq!(cursor.advance(), Step::Value(1));
    assert_eq!(cursor.advance(), Step::Value(2));
    assert_eq!(cursor.advance(), Step::Value(3));
    assert!(cursor.advance().is_end());
}
