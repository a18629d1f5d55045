//! Frontend
//!
//! Only lexical analysis lives here for now; a parser would consume the
//! token stream produced by [`lexer`].

pub mod lexer;
