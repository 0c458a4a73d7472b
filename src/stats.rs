//! 统计上下文
//!
//! `RunContext` 保存一次运行内的全部可变状态：当前数据库、全局计数以及
//! 按表计数。它在流水线中按引用传递，不使用全局变量。

use log::debug;
use std::collections::HashMap;

use crate::curd::{CurdCounts, CurdKind};
use crate::parser::rules::RuleSet;

/// 一次运行的统计上下文
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    database: Option<String>,
    total: CurdCounts,
    tables: HashMap<String, CurdCounts>,
}

impl RunContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前数据库
    pub fn database(&self) -> Option<&str> {
        self.database.as_deref()
    }

    /// 切换当前数据库，覆盖之前的值
    pub fn set_database(&mut self, name: &str) {
        if self.database.as_deref() != Some(name) {
            debug!("switch database: {:?} -> {}", self.database, name);
        }
        self.database = Some(name.to_string());
    }

    /// 用当前数据库限定表名：`db.table`，没有数据库时原样返回
    pub fn qualify_table(&self, table: &str) -> String {
        match self.database.as_deref() {
            Some(db) if !db.is_empty() => format!("{}.{}", db, table),
            _ => table.to_string(),
        }
    }

    /// 全局计数加一
    pub fn record_total(&mut self, kind: CurdKind) {
        self.total.increment(kind);
    }

    /// 表计数加一，首次出现的表以全零计数创建
    pub fn record_table(&mut self, table: &str, kind: CurdKind) {
        match self.tables.get_mut(table) {
            Some(counts) => counts.increment(kind),
            None => {
                let mut counts = CurdCounts::default();
                counts.increment(kind);
                self.tables.insert(table.to_string(), counts);
            }
        }
    }

    /// 记录一条已分类的语句
    ///
    /// 先无条件增加全局计数；只有结构模式匹配并提取到表名时，
    /// 才按当前数据库限定表名并增加该表计数。返回被计数的表名。
    pub fn record_statement(
        &mut self,
        rules: &RuleSet,
        kind: CurdKind,
        line: &str,
    ) -> Option<String> {
        self.record_total(kind);

        match rules.extract_table(kind, line) {
            Some(table) => {
                let qualified = self.qualify_table(table);
                self.record_table(&qualified, kind);
                Some(qualified)
            }
            None => {
                debug!("{} statement without table match: {}", kind, line);
                None
            }
        }
    }

    /// 全局计数
    pub fn total(&self) -> &CurdCounts {
        &self.total
    }

    /// 按表计数
    pub fn tables(&self) -> &HashMap<String, CurdCounts> {
        &self.tables
    }

    /// 不同表的数量
    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// 拆分为全局计数与按表计数
    pub fn into_parts(self) -> (CurdCounts, HashMap<String, CurdCounts>) {
        (self.total, self.tables)
    }
}
