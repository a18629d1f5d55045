//! Lexical error kinds
//!
//! Both kinds are recoverable: the lexer reports them and keeps scanning.

use serde::Serialize;

/// Lexer error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A string literal hit end of input before its closing quote
    #[error("Unterminated string.")]
    UnterminatedString { line: usize },
    /// A character no scanning rule accepts
    #[error("Unexpected character: '{ch}'")]
    UnexpectedCharacter { line: usize, ch: char },
}

impl LexError {
    /// Line the error was detected on
    pub fn line(&self) -> usize {
        match self {
            LexError::UnterminatedString { line } | LexError::UnexpectedCharacter { line, .. } => {
                *line
            }
        }
    }

    /// Stable name of the error kind
    pub fn kind_name(&self) -> &'static str {
        match self {
            LexError::UnterminatedString { .. } => "UnterminatedString",
            LexError::UnexpectedCharacter { .. } => "UnexpectedCharacter",
        }
    }

    /// `[line N] Error : message`, the line printed for a report.
    /// The blank before the colon is where a location fragment would go.
    pub fn report_line(&self) -> String {
        format!("[line {}] Error : {}", self.line(), self)
    }
}

impl Serialize for LexError {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("LexError", 3)?;
        state.serialize_field("line", &self.line())?;
        state.serialize_field("kind", self.kind_name())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
