//! JSON 诊断渲染器
//!
//! 每个错误输出为 `{"line": .., "kind": .., "message": ..}`

use crate::util::diagnostic::LexError;

/// JSON 诊断渲染器
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEmitter {
    pretty: bool,
}

impl JsonEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 缩进输出
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// 渲染为 JSON 数组
    pub fn render_all(
        &self,
        errors: &[LexError],
    ) -> serde_json::Result<String> {
        if self.pretty {
            serde_json::to_string_pretty(errors)
        } else {
            serde_json::to_string(errors)
        }
    }
}
