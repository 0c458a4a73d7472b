//! 统计结果与输出
//!
//! 包含运行摘要、排序后的按表统计以及两段 JSON 文本的渲染。

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;
use std::time::Duration;

use crate::curd::CurdCounts;
use crate::error::StatError;
use crate::json;

/// 运行摘要
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    /// 处理的行数
    #[serde(rename = "BINLOG_LINE")]
    pub line_count: usize,

    /// 出现过的不同表的数量
    #[serde(rename = "TABLE_COUNT")]
    pub table_count: usize,

    /// 耗时，输出为保留 4 位小数的秒数，如 `"0.0123s"`
    #[serde(rename = "USE_TIME", serialize_with = "serialize_elapsed")]
    pub elapsed: Duration,

    /// 全局计数
    #[serde(rename = "TOTAL_CURD_STAT")]
    pub total: CurdCounts,
}

/// 将耗时格式化为 `秒数(4 位小数) + "s"`
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.4}s", elapsed.as_secs_f64())
}

fn serialize_elapsed<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_elapsed(*elapsed))
}

/// 排序后的按表统计
///
/// 按 (UPDATE, INSERT, DELETE, SELECT) 依次降序排列；四项都相同的表按表名升序，
/// 保证多次运行输出一致。序列化为保持该顺序的 JSON 对象。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableStats {
    entries: Vec<(String, CurdCounts)>,
}

impl TableStats {
    /// 从按表计数构建并排序
    pub fn from_map(tables: HashMap<String, CurdCounts>) -> Self {
        let mut entries: Vec<(String, CurdCounts)> = tables.into_iter().collect();
        entries.sort_by(|(name_a, a), (name_b, b)| {
            b.sort_key()
                .cmp(&a.sort_key())
                .then_with(|| name_a.cmp(name_b))
        });
        Self { entries }
    }

    /// 排序后的 (表名, 计数) 列表
    pub fn entries(&self) -> &[(String, CurdCounts)] {
        &self.entries
    }

    /// 排序后的表名
    pub fn table_names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// 查找某张表的计数
    pub fn get(&self, table: &str) -> Option<&CurdCounts> {
        self.entries
            .iter()
            .find(|(name, _)| name == table)
            .map(|(_, counts)| counts)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for TableStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, counts) in &self.entries {
            map.serialize_entry(name, counts)?;
        }
        map.end()
    }
}

/// 一次分析的完整结果
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub summary: RunSummary,
    pub tables: TableStats,
}

impl AnalysisReport {
    /// 摘要 JSON（单行，`", "` 与 `": "` 分隔）
    pub fn summary_json(&self) -> Result<String, StatError> {
        json::to_string(&self.summary)
    }

    /// 按表统计 JSON（4 空格缩进）
    pub fn tables_json(&self) -> Result<String, StatError> {
        json::to_string_pretty(&self.tables)
    }

    /// 渲染两段输出文本
    pub fn render(&self) -> Result<String, StatError> {
        Ok(format!(
            "Summary Stats:  {}\nTable CURD Stats: \n {}\n",
            self.summary_json()?,
            self.tables_json()?
        ))
    }

    /// 写入输出流
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), StatError> {
        writer.write_all(self.render()?.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
