//! 命令行参数
//!
//! ```console
//! $ binlog-curd-stat bin.sql 10000
//! ```

use clap::Parser;
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::AnalyzerConfig;
use crate::error::StatError;

/// 参数错误时输出的单行用法说明
pub const USAGE: &str = "Usage: binlog-curd-stat <FILE> [LINE_LIMIT]  (FILE: mysqlbinlog text export; LINE_LIMIT: lines to read, 0 = unlimited)";

/// 统计 mysqlbinlog 文本导出中各表的 CURD 语句数量
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "binlog-curd-stat", version, about)]
pub struct Args {
    /// binlog 文本文件路径（mysqlbinlog 导出结果）
    pub file: PathBuf,

    /// 读取文件行数（可选，0 或不填表示不限制）
    #[arg(default_value_t = 0)]
    pub line_limit: usize,
}

impl Args {
    /// 转换为分析器配置
    pub fn config(&self) -> AnalyzerConfig {
        AnalyzerConfig::new().with_line_limit(self.line_limit)
    }
}

/// 解析进程参数
pub fn parse_args() -> Result<Args, StatError> {
    parse_args_from(std::env::args_os())
}

/// 解析给定参数（第一个元素为程序名）
///
/// `--help` 与 `--version` 交给 clap 处理并直接退出；其余参数错误统一返回
/// `StatError::Usage`。
pub fn parse_args_from<I, T>(args: I) -> Result<Args, StatError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(args) {
        Ok(args) => Ok(args),
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => Err(StatError::Usage(USAGE.to_string())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_only() {
        let args = parse_args_from(["binlog-curd-stat", "bin.sql"]).unwrap();
        assert_eq!(args.file, PathBuf::from("bin.sql"));
        assert_eq!(args.line_limit, 0);
        assert_eq!(args.config().line_limit, 0);
    }

    #[test]
    fn test_file_and_limit() {
        let args = parse_args_from(["binlog-curd-stat", "bin.sql", "10000"]).unwrap();
        assert_eq!(args.line_limit, 10000);
        assert_eq!(args.config().line_limit, 10000);
    }

    #[test]
    fn test_missing_file_is_usage_error() {
        let result = parse_args_from(["binlog-curd-stat"]);
        assert_eq!(result, Err(StatError::Usage(USAGE.to_string())));
    }

    #[test]
    fn test_invalid_limit_is_usage_error() {
        assert!(matches!(
            parse_args_from(["binlog-curd-stat", "bin.sql", "many"]),
            Err(StatError::Usage(_))
        ));
        // 负数不再视为不限制，按参数错误处理
        assert!(matches!(
            parse_args_from(["binlog-curd-stat", "bin.sql", "-5"]),
            Err(StatError::Usage(_))
        ));
    }
}
