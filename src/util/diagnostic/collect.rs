//! 错误收集
//!
//! 按报告顺序收集词法错误，供调用方统一判断和渲染

use super::error::LexError;
use super::reporter::ErrorReporter;

/// 错误收集器
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorCollector {
    errors: Vec<LexError>,
}

impl ErrorCollector {
    /// 创建新的错误收集器
    pub fn new() -> Self {
        Self::default()
    }

    /// 检查是否有错误
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// 获取错误数量
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// 获取所有错误
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// 取出所有错误
    pub fn into_errors(self) -> Vec<LexError> {
        self.errors
    }

    /// 清空
    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl ErrorReporter for ErrorCollector {
    fn report(
        &mut self,
        error: LexError,
    ) {
        self.errors.push(error);
    }
}
