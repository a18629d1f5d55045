//! Lexer module
//!
//! Turns Lox source text into [`Token`]s. Malformed input never stops a
//! scan: each problem goes to an [`ErrorReporter`] and scanning resumes on
//! the next character.
//!
//! ```
//! use lox_lexer::frontend::lexer::{tokenize, TokenKind};
//!
//! let scanned = tokenize("var x = 3.14;");
//! let kinds: Vec<TokenKind> = scanned.tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Var,
//!         TokenKind::Identifier,
//!         TokenKind::Equal,
//!         TokenKind::Number,
//!         TokenKind::Semicolon,
//!         TokenKind::Eof,
//!     ]
//! );
//! assert!(!scanned.has_errors());
//! ```

pub mod keywords;
pub mod literals;
pub mod tokenizer;
pub mod tokens;

// Re-export types
pub use keywords::keyword;
pub use tokenizer::Lexer;
pub use tokens::{Literal, Token, TokenKind};

use crate::util::diagnostic::{ErrorCollector, ErrorReporter, LexError};

/// Scan a whole source, sending problems to `reporter`.
///
/// The result always ends with exactly one `Eof` token.
pub fn scan<R: ErrorReporter>(
    source: &str,
    reporter: R,
) -> Vec<Token<'_>> {
    tracing::debug!("lexing started ({} bytes)", source.len());

    let mut lexer = Lexer::new(source, reporter);
    let tokens: Vec<Token<'_>> = lexer.by_ref().collect();

    tracing::debug!(
        "lexing complete: {} tokens, {} errors",
        tokens.len(),
        lexer.error_count()
    );
    tokens
}

/// Tokens plus every error reported while producing them
#[derive(Debug, Clone, PartialEq)]
pub struct Scanned<'a> {
    pub tokens: Vec<Token<'a>>,
    pub errors: Vec<LexError>,
}

impl Scanned<'_> {
    /// A session with any reported error is invalid for later stages
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Scan a source, collecting errors alongside the tokens
pub fn tokenize(source: &str) -> Scanned<'_> {
    let mut errors = ErrorCollector::new();
    let tokens = scan(source, &mut errors);
    Scanned {
        tokens,
        errors: errors.into_errors(),
    }
}

#[cfg(test)]
mod tests;
