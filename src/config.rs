//! 分析器配置
//!
//! 所有配置都来自命令行参数，不读取环境变量或配置文件。

use crate::parser::constants::DEFAULT_BUFFER_CAPACITY;

/// 分析器配置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// 最多读取的行数，0 表示不限制
    pub line_limit: usize,

    /// 行读取器的缓冲区大小（字节）
    pub buffer_capacity: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            line_limit: 0,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置行数限制，0 表示不限制
    pub fn with_line_limit(mut self, line_limit: usize) -> Self {
        self.line_limit = line_limit;
        self
    }

    /// 设置缓冲区大小
    pub fn with_buffer_capacity(mut self, buffer_capacity: usize) -> Self {
        self.buffer_capacity = buffer_capacity;
        self
    }

    /// 是否已达到行数限制
    pub fn limit_reached(&self, line_count: usize) -> bool {
        self.line_limit > 0 && line_count >= self.line_limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unlimited() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.line_limit, 0);
        assert!(!config.limit_reached(0));
        assert!(!config.limit_reached(usize::MAX));
    }

    #[test]
    fn test_limit_reached() {
        let config = AnalyzerConfig::new().with_line_limit(3);
        assert!(!config.limit_reached(2));
        assert!(config.limit_reached(3));
        assert!(config.limit_reached(4));
    }

    #[test]
    fn test_builder() {
        let config = AnalyzerConfig::new()
            .with_line_limit(10)
            .with_buffer_capacity(1024);
        assert_eq!(config.line_limit, 10);
        assert_eq!(config.buffer_capacity, 1024);
    }
}
