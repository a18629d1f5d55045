//! Lox lexical analyzer
//!
//! Converts Lox source text into an ordered sequence of classified tokens.
//!
//! # Example
//!
//! ```
//! use lox_lexer::frontend::lexer::{scan, TokenKind};
//! use lox_lexer::util::diagnostic::ErrorCollector;
//!
//! let mut errors = ErrorCollector::new();
//! let tokens = scan("print \"hi\";", &mut errors);
//! assert_eq!(tokens[1].kind, TokenKind::String);
//! assert!(!errors.has_errors());
//! ```

#![doc(html_root_url = "https://docs.rs/lox-lexer")]
#![warn(rust_2018_idioms)]

// Public modules
pub mod frontend;
pub mod repl;

// Utility modules
pub mod util;

// Re-exports
pub use anyhow::{Context, Result};
pub use frontend::lexer::{scan, tokenize, Lexer, Literal, Token, TokenKind};
pub use util::diagnostic::{ErrorCollector, ErrorReporter, LexError};

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::util::config::OutputFormat;
use crate::util::diagnostic::{JsonEmitter, TextEmitter};
use crate::util::span::SourceFile;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Display name
pub const NAME: &str = "loxlex";

/// Render tokens the way the CLI prints them
///
/// Text: one `KIND lexeme literal` line per token. JSON: a single array.
pub fn render_tokens(
    tokens: &[Token<'_>],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(tokens.iter().map(|t| format!("{}\n", t)).collect()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string(tokens).context("Failed to encode tokens")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Scan `source`, print its tokens to stdout and its errors to stderr
///
/// Returns whether any lexical error was reported.
pub fn run_source(
    name: &str,
    source: &str,
    format: OutputFormat,
) -> Result<bool> {
    let scanned = tokenize(source);
    debug!(
        "{}: {} tokens, {} errors",
        name,
        scanned.tokens.len(),
        scanned.errors.len()
    );

    let rendered = render_tokens(&scanned.tokens, format)?;
    std::io::stdout()
        .lock()
        .write_all(rendered.as_bytes())
        .context("Failed to write tokens")?;

    if scanned.has_errors() {
        let report = match format {
            OutputFormat::Text => {
                let file = SourceFile::new(name, source);
                TextEmitter::new().render_all(&scanned.errors, Some(&file))
            }
            OutputFormat::Json => {
                let mut json = JsonEmitter::new()
                    .render_all(&scanned.errors)
                    .context("Failed to encode errors")?;
                json.push('\n');
                json
            }
        };
        std::io::stderr()
            .lock()
            .write_all(report.as_bytes())
            .context("Failed to write errors")?;
    }

    Ok(scanned.has_errors())
}

/// Scan inline code
pub fn run(
    source: &str,
    format: OutputFormat,
) -> Result<bool> {
    run_source("<eval>", source, format)
}

/// Scan a file
pub fn run_file(
    path: &Path,
    format: OutputFormat,
) -> Result<bool> {
    debug!("reading {}", path.display());
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    run_source(&path.display().to_string(), &source, format)
}
