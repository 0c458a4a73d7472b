//! CURD 语句类型与计数结构

use serde::Serialize;
use std::fmt;

/// 统计的四种语句类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurdKind {
    Insert,
    Update,
    Select,
    Delete,
}

impl CurdKind {
    /// 按输出顺序排列的全部类型
    pub const ALL: [CurdKind; 4] = [
        CurdKind::Insert,
        CurdKind::Update,
        CurdKind::Select,
        CurdKind::Delete,
    ];

    /// 大写关键字
    pub fn as_str(&self) -> &'static str {
        match self {
            CurdKind::Insert => "INSERT",
            CurdKind::Update => "UPDATE",
            CurdKind::Select => "SELECT",
            CurdKind::Delete => "DELETE",
        }
    }

    /// 从关键字解析（忽略大小写）
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        CurdKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(keyword))
    }
}

impl fmt::Display for CurdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 四种语句的计数
///
/// 既用作全局总计，也用作单表统计的值类型。序列化时字段顺序固定为
/// `INSERT`、`UPDATE`、`SELECT`、`DELETE`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CurdCounts {
    #[serde(rename = "INSERT")]
    pub insert: u64,

    #[serde(rename = "UPDATE")]
    pub update: u64,

    #[serde(rename = "SELECT")]
    pub select: u64,

    #[serde(rename = "DELETE")]
    pub delete: u64,
}

impl CurdCounts {
    /// 对应类型计数加一
    pub fn increment(&mut self, kind: CurdKind) {
        *self.slot_mut(kind) += 1;
    }

    /// 读取对应类型的计数
    pub fn get(&self, kind: CurdKind) -> u64 {
        match kind {
            CurdKind::Insert => self.insert,
            CurdKind::Update => self.update,
            CurdKind::Select => self.select,
            CurdKind::Delete => self.delete,
        }
    }

    /// 四种计数之和
    pub fn total(&self) -> u64 {
        self.insert + self.update + self.select + self.delete
    }

    /// 报表排序键：UPDATE、INSERT、DELETE、SELECT
    pub fn sort_key(&self) -> (u64, u64, u64, u64) {
        (self.update, self.insert, self.delete, self.select)
    }

    fn slot_mut(&mut self, kind: CurdKind) -> &mut u64 {
        match kind {
            CurdKind::Insert => &mut self.insert,
            CurdKind::Update => &mut self.update,
            CurdKind::Select => &mut self.select,
            CurdKind::Delete => &mut self.delete,
        }
    }
}
