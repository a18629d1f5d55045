//! Lexer tests module
//!
//! - basic: 基础测试（空白符、换行、位置、迭代器）
//! - literals: 字面量测试（数字、字符串）
//! - operators: 运算符与分隔符测试
//! - keywords: 关键字测试
//! - comments: 注释测试
//! - errors: 错误处理测试
//! - properties: proptest 性质测试

use crate::frontend::lexer::{tokenize, TokenKind};


/// Token kinds of a scan, `Eof` included
fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).tokens.iter().map(|t| t.kind).collect()
}
