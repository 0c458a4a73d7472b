//! # Binlog CURD Stat
//!
//! 统计 MySQL binlog 文本导出（`mysqlbinlog` 的输出）中各表的
//! INSERT / UPDATE / SELECT / DELETE 语句数量，用于估算每张表的读写压力。
//!
//! ## 功能特性
//!
//! - **流式处理**: 逐行读取，内存占用与文件大小无关
//! - **二进制检测**: 拒绝未经导出的原始 binlog 文件（魔数 `fe62696e`）
//! - **数据库上下文**: 根据 ``USE `db` `` 指令把表名限定为 `db.table`
//! - **声明式规则**: 每种语句的结构模式是一条独立的规则，可单独测试和替换
//! - **稳定排序**: 按 UPDATE、INSERT、DELETE、SELECT 依次降序输出
//!
//! ## 快速开始
//!
//! ```rust
//! use binlog_curd_stat::{Analyzer, AnalyzerConfig};
//!
//! let log_content = "USE `shop`;\n\
//!     INSERT INTO `orders` (id) VALUES (1);\n\
//!     SELECT id FROM `orders` WHERE id=1;";
//!
//! let report = Analyzer::new(AnalyzerConfig::default())
//!     .analyze_reader(log_content.as_bytes())
//!     .unwrap();
//!
//! assert_eq!(report.summary.line_count, 3);
//! assert_eq!(report.summary.total.insert, 1);
//! assert_eq!(report.tables.get("shop.orders").unwrap().select, 1);
//! ```
//!
//! ### 从文件读取
//!
//! ```rust,no_run
//! use binlog_curd_stat::analyze_file;
//!
//! // 只读取前 10000 行
//! let report = analyze_file("bin.sql", 10000)?;
//! print!("{}", report.render()?);
//! # Ok::<(), binlog_curd_stat::StatError>(())
//! ```
//!
//! ## 统计口径
//!
//! 行首关键字匹配即计入全局总数；只有语句结构也匹配（表名使用反引号、
//! 带有 WHERE 等）时才计入对应表。因此某类型的全局总数可能大于各表之和。

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod curd;
pub mod error;
pub mod json;
pub mod parser;
pub mod report;
pub mod stats;
pub mod tools;

pub use analyzer::{Analyzer, analyze_file};
pub use config::AnalyzerConfig;
pub use curd::{CurdCounts, CurdKind};
pub use error::StatError;
pub use parser::{
    LineReader, RuleSet, StatementRule, classify_statement, database_from_use_statement,
    iter_lines_from_file,
};
pub use report::{AnalysisReport, RunSummary, TableStats};
pub use stats::RunContext;
pub use tools::{is_binlog_file, is_binlog_magic};
