//! Error reporting channel used by the lexer

use std::io::{self, Write};

use super::error::LexError;

/// Receives lexical errors as they are found.
///
/// Reporting never stops a scan; whether a session failed is for the caller
/// to decide from what the reporter saw.
pub trait ErrorReporter {
    fn report(
        &mut self,
        error: LexError,
    );
}

impl<R: ErrorReporter + ?Sized> ErrorReporter for &mut R {
    fn report(
        &mut self,
        error: LexError,
    ) {
        (**self).report(error);
    }
}

impl<R: ErrorReporter + ?Sized> ErrorReporter for Box<R> {
    fn report(
        &mut self,
        error: LexError,
    ) {
        (**self).report(error);
    }
}

/// Writes `[line N] Error : message` to a stream as errors arrive
#[derive(Debug)]
pub struct WriteReporter<W: Write> {
    out: W,
    count: usize,
}

/// The reporter the CLI uses
pub type StderrReporter = WriteReporter<io::Stderr>;

impl StderrReporter {
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }
}

impl Default for StderrReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> WriteReporter<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out, count: 0 }
    }

    /// Whether anything was reported since the last reset
    pub fn had_error(&self) -> bool {
        self.count > 0
    }

    pub fn error_count(&self) -> usize {
        self.count
    }

    /// Forget earlier reports (one REPL line does not poison the next)
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// The underlying stream
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ErrorReporter for WriteReporter<W> {
    fn report(
        &mut self,
        error: LexError,
    ) {
        self.count += 1;
        // stream closed: nothing left to tell
        let _ = writeln!(self.out, "{}", error.report_line());
    }
}
