//! Span 单元测试
//!
//! 测试源位置跟踪的 Position、Span 和 SourceFile

use crate::util::span::{Position, SourceFile, Span};

#[test]
fn test_position_with_offset() {
    let pos = Position::with_offset(1, 5, 100);
    assert_eq!(pos.line, 1);
    assert_eq!(pos.column, 5);
    assert_eq!(pos.offset, 100);
}

#[test]
fn test_position_display() {
    let pos = Position::new(10, 20);
    assert_eq!(format!("{}", pos), "10:20");
}

#[test]
fn test_span_len_and_range() {
    let span = Span::new(
        Position::with_offset(1, 1, 4),
        Position::with_offset(1, 4, 7),
    );
    assert_eq!(span.len(), 3);
    assert_eq!(span.range(), 4..7);
    assert!(!span.is_empty());
    assert_eq!(format!("{}", span), "[1:1 - 1:4]");
}

#[test]
fn test_point_span_is_empty() {
    let span = Span::point(Position::start());
    assert!(span.is_empty());
    assert_eq!(span.len(), 0);
}

#[test]
fn test_source_file_lines() {
    let file = SourceFile::new("main.lox", "var a;\r\nprint a;\n");
    assert_eq!(file.line_count(), 3);
    assert_eq!(file.line_text(1), Some("var a;"));
    assert_eq!(file.line_text(2), Some("print a;"));
    assert_eq!(file.line_text(3), Some(""));
    assert_eq!(file.line_text(0), None);
    assert_eq!(file.line_text(4), None);
}

#[test]
fn test_source_text_for_span() {
    let file = SourceFile::new("<eval>", "1 + 22");
    let span = Span::new(
        Position::with_offset(1, 5, 4),
        Position::with_offset(1, 7, 6),
    );
    assert_eq!(file.source_text(span), Some("22"));
    assert_eq!(file.to_string(), "<eval>");
}
