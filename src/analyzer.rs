//! 统计流水线
//!
//! 对输入做一次顺序遍历：每一行先交给数据库切换指令匹配，再做语句分类，
//! 分类成功后用结构规则提取表名并计数。遍历结束或达到行数限制后生成报告。

use log::{info, warn};
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use crate::config::AnalyzerConfig;
use crate::error::StatError;
use crate::parser::classify::{classify_statement, database_from_use_statement};
use crate::parser::line_reader::{LineReader, iter_lines_from_file_with_capacity};
use crate::parser::rules::RuleSet;
use crate::report::{AnalysisReport, RunSummary, TableStats};
use crate::stats::RunContext;
use crate::tools::is_binlog_file;

/// CURD 统计分析器
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    rules: RuleSet,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

impl Analyzer {
    /// 使用默认规则创建分析器
    pub fn new(config: AnalyzerConfig) -> Self {
        Self::with_rules(config, RuleSet::default())
    }

    /// 使用自定义规则创建分析器
    pub fn with_rules(config: AnalyzerConfig, rules: RuleSet) -> Self {
        Self { config, rules }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// 处理单行
    ///
    /// 数据库切换指令更新上下文；以 INSERT/UPDATE/SELECT/DELETE 开头的行
    /// 增加全局计数，结构匹配时再增加表计数。其余行直接忽略。
    pub fn process_line(&self, ctx: &mut RunContext, line: &str) {
        if let Some(database) = database_from_use_statement(line) {
            ctx.set_database(database);
        }

        if let Some(kind) = classify_statement(line) {
            ctx.record_statement(&self.rules, kind, line);
        }
    }

    /// 对一串行做统计
    ///
    /// 任一行读取失败都会直接返回错误，不生成部分结果；
    /// 达到行数限制属于正常结束。
    pub fn analyze_lines<I>(&self, lines: I) -> Result<AnalysisReport, StatError>
    where
        I: IntoIterator<Item = Result<String, StatError>>,
    {
        self.analyze_lines_since(lines, Instant::now())
    }

    /// 从任意 Reader 读取并统计
    pub fn analyze_reader<R: Read>(&self, reader: R) -> Result<AnalysisReport, StatError> {
        let started = Instant::now();
        let lines = LineReader::with_capacity(self.config.buffer_capacity, reader);
        self.analyze_lines_since(lines, started)
    }

    /// 检查并统计一个文件
    ///
    /// # 错误
    ///
    /// - `FileNotExists` - 路径不存在
    /// - `BinaryLog` - 文件是未导出的原始 binlog
    /// - `FileAccess` - 打开或读取失败
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<AnalysisReport, StatError> {
        let started = Instant::now();
        let path = path.as_ref();

        if !path.exists() {
            return Err(StatError::FileNotExists(path.display().to_string()));
        }

        if is_binlog_file(path)? {
            warn!("{} starts with the binlog magic header", path.display());
            return Err(StatError::BinaryLog(path.display().to_string()));
        }

        let lines = iter_lines_from_file_with_capacity(path, self.config.buffer_capacity)?;
        self.analyze_lines_since(lines, started)
    }

    fn analyze_lines_since<I>(&self, lines: I, started: Instant) -> Result<AnalysisReport, StatError>
    where
        I: IntoIterator<Item = Result<String, StatError>>,
    {
        let mut ctx = RunContext::new();
        let mut line_count = 0usize;

        for line in lines {
            let line = line?;
            line_count += 1;

            self.process_line(&mut ctx, &line);

            if self.config.limit_reached(line_count) {
                info!("line limit {} reached, stop reading", self.config.line_limit);
                break;
            }
        }

        let table_count = ctx.table_count();
        let (total, tables) = ctx.into_parts();
        let summary = RunSummary {
            line_count,
            table_count,
            elapsed: started.elapsed(),
            total,
        };

        info!(
            "processed {} lines, {} tables, {} statements",
            summary.line_count,
            summary.table_count,
            summary.total.total()
        );

        Ok(AnalysisReport {
            summary,
            tables: TableStats::from_map(tables),
        })
    }
}

/// 便捷函数：按给定行数限制统计一个文件（0 表示不限制）
///
/// # 示例
///
/// ```no_run
/// use binlog_curd_stat::analyze_file;
///
/// let report = analyze_file("bin.sql", 10000)?;
/// println!("{}", report.render()?);
/// # Ok::<(), binlog_curd_stat::StatError>(())
/// ```
pub fn analyze_file<P: AsRef<Path>>(path: P, line_limit: usize) -> Result<AnalysisReport, StatError> {
    Analyzer::new(AnalyzerConfig::new().with_line_limit(line_limit)).analyze_file(path)
}
