//! 文本诊断渲染器

use crate::util::diagnostic::LexError;
use crate::util::span::SourceFile;

/// 渲染器配置
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    /// 是否显示源码行
    pub show_source: bool,
    /// 是否显示行号
    pub show_line_numbers: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            show_source: true,
            show_line_numbers: true,
        }
    }
}

/// 文本诊断渲染器
///
/// ```text
/// [line 2] Error : Unexpected character: '@'
///     2 | var x = @;
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextEmitter {
    config: EmitterConfig,
}

impl TextEmitter {
    /// 创建新的文本渲染器
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用自定义配置创建渲染器
    pub fn with_config(config: EmitterConfig) -> Self {
        Self { config }
    }

    /// 渲染单个诊断
    pub fn render(
        &self,
        error: &LexError,
        source_file: Option<&SourceFile>,
    ) -> String {
        let mut output = format!("{}\n", error.report_line());

        if self.config.show_source {
            if let Some(text) = source_file.and_then(|sf| sf.line_text(error.line())) {
                if self.config.show_line_numbers {
                    output.push_str(&format!("{:>5} | {}\n", error.line(), text));
                } else {
                    output.push_str(&format!("  {}\n", text));
                }
            }
        }

        output
    }

    /// 渲染多个诊断
    pub fn render_all(
        &self,
        errors: &[LexError],
        source_file: Option<&SourceFile>,
    ) -> String {
        errors
            .iter()
            .map(|error| self.render(error, source_file))
            .collect()
    }
}
