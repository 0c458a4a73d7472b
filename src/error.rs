//! 错误类型定义
//!
//! 定义了统计过程中可能出现的所有错误类型。模式未匹配不属于错误，
//! 只会被静默跳过。

use thiserror::Error;

/// 统计错误类型
///
/// 任何一种错误都会终止本次运行，不做重试，也不输出部分结果。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatError {
    /// 缺少必需参数或参数格式错误
    #[error("{0}")]
    Usage(String),

    /// 文件路径不存在
    #[error("File not exists.")]
    FileNotExists(String),

    /// 检测到原始二进制 binlog 文件
    #[error("This is a binlog file, please use mysqlbinlog tool to export result first.")]
    BinaryLog(String),

    /// 打开或读取文件失败（包括非 UTF-8 内容）
    #[error("file access error: {0}")]
    FileAccess(String),

    /// 语句规则的正则无法编译
    #[error("invalid statement rule for {kind}: {reason}")]
    InvalidRule {
        /// 规则对应的语句类型
        kind: String,
        /// 编译失败原因
        reason: String,
    },

    /// 输出渲染失败
    #[error("failed to render report: {0}")]
    Render(String),
}

impl StatError {
    /// 面向用户的提示（用法、文件不存在、二进制 binlog）写到标准输出，
    /// 其余错误写到标准错误
    pub fn is_user_notice(&self) -> bool {
        matches!(
            self,
            StatError::Usage(_) | StatError::FileNotExists(_) | StatError::BinaryLog(_)
        )
    }
}

impl From<std::io::Error> for StatError {
    fn from(e: std::io::Error) -> Self {
        StatError::FileAccess(e.to_string())
    }
}

impl From<serde_json::Error> for StatError {
    fn from(e: serde_json::Error) -> Self {
        StatError::Render(e.to_string())
    }
}
