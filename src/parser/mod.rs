//! Parser 模块 - 读取并识别 binlog 文本导出中的语句
//!
//! 此模块提供了:
//! - 逐行读取（LineReader）
//! - 数据库切换指令与语句类型识别
//! - 按语句类型声明的结构规则（提取表名）

pub mod classify;
pub mod constants;
pub mod line_reader;
pub mod rules;

pub use classify::{classify_statement, database_from_use_statement};
pub use line_reader::{LineReader, iter_lines_from_file, iter_lines_from_file_with_capacity};
pub use rules::{CompiledRule, RuleSet, StatementRule};

#[cfg(test)]
mod tests;
