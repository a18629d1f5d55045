//! Reserved word table
//!
//! Built once on first use and only ever read afterwards, so any number of
//! concurrent scans can share it.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::tokens::TokenKind;

static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    HashMap::from([
        ("and", TokenKind::And),
        ("class", TokenKind::Class),
        ("else", TokenKind::Else),
        ("false", TokenKind::False),
        ("for", TokenKind::For),
        ("fun", TokenKind::Fun),
        ("if", TokenKind::If),
        ("nil", TokenKind::Nil),
        ("or", TokenKind::Or),
        ("print", TokenKind::Print),
        ("return", TokenKind::Return),
        ("super", TokenKind::Super),
        ("this", TokenKind::This),
        ("true", TokenKind::True),
        ("var", TokenKind::Var),
        ("while", TokenKind::While),
    ])
});

/// Keyword kind for an exact lexeme
pub fn keyword(lexeme: &str) -> Option<TokenKind> {
    KEYWORDS.get(lexeme).copied()
}

/// All reserved words, in no particular order
pub fn keywords() -> impl Iterator<Item = (&'static str, TokenKind)> {
    KEYWORDS.iter().map(|(&word, &kind)| (word, kind))
}
