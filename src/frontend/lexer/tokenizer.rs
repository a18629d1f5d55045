//! Tokenizer implementation
//! Main lexer structure and token generation logic

use std::iter::FusedIterator;

use super::keywords::keyword;
use super::literals::{is_alpha, is_alphanumeric, is_digit, scan_number, scan_string};
use super::tokens::{Literal, Token, TokenKind};
use crate::util::diagnostic::{ErrorReporter, LexError};
use crate::util::span::{Position, Span};

/// Main lexer structure
///
/// One instance scans one source, once. Tokens are pulled through
/// [`Iterator`]; the final item is always a single `Eof` token.
pub struct Lexer<'a, R: ErrorReporter> {
    source: &'a str,
    /// Byte offset where the current lexeme begins
    lexeme_start: usize,
    /// Byte offset of the next unconsumed char
    current: usize,
    line: usize,
    column: usize,
    start_line: usize,
    start_column: usize,
    reporter: R,
    error_count: usize,
    emitted_eof: bool,
}

impl<'a, R: ErrorReporter> Lexer<'a, R> {
    /// Create a new lexer for the given source
    pub fn new(
        source: &'a str,
        reporter: R,
    ) -> Self {
        Self {
            source,
            lexeme_start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_line: 1,
            start_column: 1,
            reporter,
            error_count: 0,
            emitted_eof: false,
        }
    }

    /// Current line (1-indexed)
    pub fn line(&self) -> usize {
        self.line
    }

    /// Errors reported so far by this lexer
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Give back the reporter
    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Get current position
    pub fn current_position(&self) -> Position {
        Position::with_offset(self.line, self.column, self.current)
    }

    /// Get start position of current lexeme
    pub fn start_position(&self) -> Position {
        Position::with_offset(self.start_line, self.start_column, self.lexeme_start)
    }

    /// Get span of current lexeme
    pub fn span(&self) -> Span {
        Span::new(self.start_position(), self.current_position())
    }

    /// Source text of the current lexeme
    pub(crate) fn lexeme(&self) -> &'a str {
        &self.source[self.lexeme_start..self.current]
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Consume the next char, tracking line and column
    pub(crate) fn advance(&mut self) -> Option<char> {
        let c = self.source[self.current..].chars().next()?;
        self.current += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Peek at next char
    pub(crate) fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    /// Peek at the char after next
    pub(crate) fn peek_next(&self) -> Option<char> {
        self.source[self.current..].chars().nth(1)
    }

    /// Consume the next char only if it is `expected`
    fn match_char(
        &mut self,
        expected: char,
    ) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Hand an error to the reporter; scanning carries on
    pub(crate) fn report(
        &mut self,
        error: LexError,
    ) {
        tracing::debug!("reported at line {}: {}", error.line(), error);
        self.error_count += 1;
        self.reporter.report(error);
    }

    /// Create token for the current lexeme
    pub(crate) fn make_token(
        &self,
        kind: TokenKind,
    ) -> Token<'a> {
        self.make_literal_token(kind, Literal::None)
    }

    /// Create token for the current lexeme carrying a literal value
    pub(crate) fn make_literal_token(
        &self,
        kind: TokenKind,
        literal: Literal<'a>,
    ) -> Token<'a> {
        Token::new(kind, self.lexeme(), literal, self.line, self.span())
    }

    /// Generate next token, or `None` once `Eof` has been produced
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        loop {
            self.lexeme_start = self.current;
            self.start_line = self.line;
            self.start_column = self.column;

            let Some(c) = self.advance() else {
                break;
            };

            if let Some(token) = self.scan_token(c) {
                return Some(token);
            }
        }

        if self.emitted_eof {
            return None;
        }
        self.emitted_eof = true;
        Some(Token::new(
            TokenKind::Eof,
            "",
            Literal::None,
            self.line,
            Span::point(self.current_position()),
        ))
    }

    /// Dispatch on the first char of a lexeme.
    /// `None` means the lexeme produced no token (whitespace, comment, error).
    fn scan_token(
        &mut self,
        c: char,
    ) -> Option<Token<'a>> {
        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '-' => TokenKind::Minus,
            '+' => TokenKind::Plus,
            ';' => TokenKind::Semicolon,
            '*' => TokenKind::Star,
            '!' => {
                if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                }
            }
            '=' => {
                if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                }
            }
            '<' => {
                if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                }
            }
            '>' => {
                if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                }
            }
            '/' => {
                if self.match_char('/') {
                    self.skip_line_comment();
                    return None;
                }
                TokenKind::Slash
            }
            // `advance` already bumped the line for '\n'
            ' ' | '\r' | '\t' | '\n' => return None,
            '"' => return scan_string(self),
            c if is_digit(c) => return Some(scan_number(self)),
            c if is_alpha(c) => return Some(self.scan_identifier()),
            c => {
                self.report(LexError::UnexpectedCharacter {
                    line: self.line,
                    ch: c,
                });
                return None;
            }
        };

        Some(self.make_token(kind))
    }

    /// Skip to end of line; the '\n' itself is left for the main loop
    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Scan identifier or keyword (maximal munch, then table lookup)
    fn scan_identifier(&mut self) -> Token<'a> {
        while self.peek().is_some_and(is_alphanumeric) {
            self.advance();
        }

        let kind = keyword(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.make_token(kind)
    }
}

impl<'a, R: ErrorReporter> Iterator for Lexer<'a, R> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token()?;
        tracing::trace!(
            "[line {}] {} {:?}",
            token.line,
            token.kind,
            token.lexeme
        );
        Some(token)
    }
}

impl<R: ErrorReporter> FusedIterator for Lexer<'_, R> {}
