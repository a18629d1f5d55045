//! Line-based REPL with rustyline
//!
//! Every line is scanned on its own with a fresh lexer; an error on one line
//! does not carry over to the next.

use std::io::{self, Write};

use anyhow::{Context, Result};
use rustyline::config::Config;
use rustyline::error::ReadlineError;
use rustyline::history::FileHistory;
use rustyline::Editor;

use crate::frontend::lexer::{scan, Token};
use crate::render_tokens;
use crate::util::config::{OutputFormat, ReplConfig};
use crate::util::diagnostic::{ErrorCollector, JsonEmitter, WriteReporter};

/// Scans single lines, printing tokens to `out` and errors to `err`
///
/// Text errors stream out while the line is scanned, ahead of its tokens.
/// JSON errors are collected and written as one array after the tokens.
pub struct LineEvaluator<W: Write, E: Write> {
    format: OutputFormat,
    out: W,
    reporter: WriteReporter<E>,
}

impl<W: Write, E: Write> LineEvaluator<W, E> {
    pub fn new(
        format: OutputFormat,
        out: W,
        err: E,
    ) -> Self {
        Self {
            format,
            out,
            reporter: WriteReporter::with_writer(err),
        }
    }

    /// Scan one line and print it; returns whether it had errors
    pub fn eval_line(
        &mut self,
        line: &str,
    ) -> Result<bool> {
        self.reporter.reset();

        let had_error = match self.format {
            OutputFormat::Text => {
                let tokens = scan(line, &mut self.reporter);
                self.write_tokens(&tokens)?;
                self.reporter.had_error()
            }
            OutputFormat::Json => {
                let mut errors = ErrorCollector::new();
                let tokens = scan(line, &mut errors);
                self.write_tokens(&tokens)?;

                if errors.has_errors() {
                    let json = JsonEmitter::new()
                        .render_all(errors.errors())
                        .context("Failed to encode errors")?;
                    let err = self.reporter.writer_mut();
                    writeln!(err, "{}", json)?;
                    err.flush()?;
                }
                errors.has_errors()
            }
        };

        Ok(had_error)
    }

    fn write_tokens(
        &mut self,
        tokens: &[Token<'_>],
    ) -> Result<()> {
        let rendered = render_tokens(tokens, self.format)?;
        self.out.write_all(rendered.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }

    /// Give back both streams
    pub fn into_inner(self) -> (W, E) {
        (self.out, self.reporter.into_inner())
    }
}

/// Line REPL
pub struct LineRepl {
    config: ReplConfig,
    editor: Editor<(), FileHistory>,
    eval: LineEvaluator<io::Stdout, io::Stderr>,
}

impl LineRepl {
    /// Create with custom config
    pub fn new(
        config: ReplConfig,
        format: OutputFormat,
    ) -> Result<Self> {
        let rl_config = Config::builder()
            .max_history_size(config.history_size)
            .context("Invalid REPL history size")?
            .history_ignore_space(true)
            .build();

        let mut editor =
            Editor::with_config(rl_config).context("Failed to start line editor")?;

        if let Some(history_file) = &config.history_file {
            if history_file.exists() {
                if let Err(e) = editor.load_history(history_file) {
                    tracing::warn!("could not load history {}: {}", history_file.display(), e);
                }
            }
        }

        Ok(Self {
            config,
            editor,
            eval: LineEvaluator::new(format, io::stdout(), io::stderr()),
        })
    }

    /// Run until Ctrl-D / Ctrl-C
    pub fn run(&mut self) -> Result<()> {
        println!("Welcome to Lox Repl");

        loop {
            match self.editor.readline(&self.config.prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        self.editor.add_history_entry(line.as_str())?;
                    }
                    self.eval.eval_line(&line)?;
                }
                Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => break,
                Err(e) => return Err(e).context("Failed to read line"),
            }
        }

        if let Some(history_file) = &self.config.history_file {
            if let Err(e) = self.editor.save_history(history_file) {
                tracing::warn!("could not save history {}: {}", history_file.display(), e);
            }
        }

        Ok(())
    }
}
