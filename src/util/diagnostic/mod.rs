//! 诊断系统
//!
//! 词法错误、错误报告通道和诊断渲染
//!
//! # 模块结构
//!
//! - [`error`] - 词法错误 (LexError)
//! - [`reporter`] - 报告通道 (ErrorReporter, WriteReporter, StderrReporter)
//! - [`collect`] - 错误收集器
//! - [`emitter`] - 文本 / JSON 渲染
//!
//! # 示例
//!
//! ```
//! use lox_lexer::util::diagnostic::{ErrorCollector, TextEmitter};
//! use lox_lexer::frontend::lexer::scan;
//!
//! let mut errors = ErrorCollector::new();
//! let tokens = scan("var a = @;", &mut errors);
//! assert_eq!(tokens.len(), 5);
//! print!("{}", TextEmitter::new().render_all(errors.errors(), None));
//! ```

pub mod collect;
pub mod emitter;
pub mod error;
pub mod reporter;

// 重新导出
pub use collect::ErrorCollector;
pub use emitter::{EmitterConfig, JsonEmitter, TextEmitter};
pub use error::LexError;
pub use reporter::{ErrorReporter, StderrReporter, WriteReporter};
