//! Library-level scanning through the public API

use lox_lexer::util::diagnostic::{ErrorCollector, LexError};
use lox_lexer::{scan, tokenize, Literal, TokenKind};

const PROGRAM: &str = r#"// counter
fun makeCounter() {
  var i = 0;
  fun count() {
    i = i + 1;
    print i;
  }
  return count;
}

var counter = makeCounter();
counter(); // "1"
print "done" != nil;
"#;

#[test]
fn test_scan_program() {
    let scanned = tokenize(PROGRAM);
    assert!(!scanned.has_errors());

    let funs = scanned
        .tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Fun)
        .count();
    assert_eq!(funs, 2);

    let done = scanned
        .tokens
        .iter()
        .find(|t| t.kind == TokenKind::String)
        .unwrap();
    assert_eq!(done.literal, Literal::String("done"));
    assert_eq!(done.line, 13);

    let eof = scanned.tokens.last().unwrap();
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.line, 14);
}

#[test]
fn test_scan_with_collector() {
    let mut errors = ErrorCollector::new();
    let tokens = scan("var a = 1 | 2;", &mut errors);

    assert_eq!(tokens.len(), 7);
    assert_eq!(
        errors.errors(),
        &[LexError::UnexpectedCharacter { line: 1, ch: '|' }]
    );
}

#[test]
fn test_tokens_borrow_source() {
    let source = String::from("print greeting;");
    let scanned = tokenize(&source);
    let lexeme = scanned.tokens[1].lexeme;
    assert_eq!(lexeme, "greeting");
    assert!(source.as_ptr() <= lexeme.as_ptr());
}
