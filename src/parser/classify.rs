//! 行分类：数据库切换指令与语句类型关键字

use crate::curd::CurdKind;
use crate::parser::constants::{CURD_KEYWORD_RE, USE_DATABASE_RE};

/// 从 `USE \`db\`` 指令中提取数据库名
///
/// 忽略大小写，必须位于行首；不是切换指令时返回 `None`。
pub fn database_from_use_statement(line: &str) -> Option<&str> {
    USE_DATABASE_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// 根据行首关键字判断语句类型
///
/// 只检查关键字本身，不校验语句结构，例如 `SELECT 1` 同样会被识别为 SELECT。
pub fn classify_statement(line: &str) -> Option<CurdKind> {
    CURD_KEYWORD_RE
        .find(line)
        .and_then(|m| CurdKind::from_keyword(m.as_str()))
}
