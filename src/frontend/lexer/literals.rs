//! Literal scanning implementations
//! Handles number and string literals plus the char classes dispatch uses

use super::tokenizer::Lexer;
use super::tokens::{Literal, Token, TokenKind};
use crate::util::diagnostic::{ErrorReporter, LexError};

/// Scan the rest of a string literal; the opening quote is already consumed.
///
/// No escape sequences. Newlines are allowed and counted. Hitting end of
/// input reports `UnterminatedString` and yields no token.
pub fn scan_string<'a, R: ErrorReporter>(lexer: &mut Lexer<'a, R>) -> Option<Token<'a>> {
    while let Some(c) = lexer.peek() {
        if c == '"' {
            break;
        }
        lexer.advance();
    }

    if lexer.is_at_end() {
        let line = lexer.line();
        lexer.report(LexError::UnterminatedString { line });
        return None;
    }

    // closing quote
    lexer.advance();

    let lexeme = lexer.lexeme();
    let value = &lexeme[1..lexeme.len() - 1];
    Some(lexer.make_literal_token(TokenKind::String, Literal::String(value)))
}

/// Scan the rest of a number literal; the first digit is already consumed.
///
/// `digits ( '.' digits )?` - a dot only belongs to the number when a digit
/// follows it, so `1.` is `1` then `.`.
pub fn scan_number<'a, R: ErrorReporter>(lexer: &mut Lexer<'a, R>) -> Token<'a> {
    consume_digits(lexer);

    if lexer.peek() == Some('.') && lexer.peek_next().is_some_and(is_digit) {
        lexer.advance();
        consume_digits(lexer);
    }

    let lexeme = lexer.lexeme();
    let value = lexeme
        .parse::<f64>()
        .unwrap_or_else(|_| unreachable!("`{}` is a plain decimal literal", lexeme));
    lexer.make_literal_token(TokenKind::Number, Literal::Number(value))
}

fn consume_digits<R: ErrorReporter>(lexer: &mut Lexer<'_, R>) {
    while lexer.peek().is_some_and(is_digit) {
        lexer.advance();
    }
}

/// ASCII decimal digit
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Identifier start: ASCII letter or underscore
#[inline]
pub fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Identifier continuation
#[inline]
pub fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || is_digit(c)
}
