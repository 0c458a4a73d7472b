//! 语句结构规则
//!
//! 每种语句类型对应一条声明式规则（类型 + 正则模式 + 表名捕获组），
//! 语句格式变化时只需更新规则表，而不需要修改统计逻辑。

use once_cell::sync::Lazy;
use regex::Regex;

use crate::curd::CurdKind;
use crate::error::StatError;
use crate::parser::constants::{
    DELETE_PATTERN, INSERT_PATTERN, SELECT_PATTERN, TABLE_NAME_GROUP, UPDATE_PATTERN,
};

/// 语句规则定义
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementRule {
    /// 规则适用的语句类型
    pub kind: CurdKind,

    /// 结构模式（忽略大小写、锚定行首）
    pub pattern: &'static str,

    /// 表名所在的命名捕获组
    pub table_group: &'static str,
}

impl StatementRule {
    /// MySQL binlog 文本导出的默认规则表
    pub const MYSQL_DEFAULT: [StatementRule; 4] = [
        StatementRule {
            kind: CurdKind::Insert,
            pattern: INSERT_PATTERN,
            table_group: TABLE_NAME_GROUP,
        },
        StatementRule {
            kind: CurdKind::Update,
            pattern: UPDATE_PATTERN,
            table_group: TABLE_NAME_GROUP,
        },
        StatementRule {
            kind: CurdKind::Select,
            pattern: SELECT_PATTERN,
            table_group: TABLE_NAME_GROUP,
        },
        StatementRule {
            kind: CurdKind::Delete,
            pattern: DELETE_PATTERN,
            table_group: TABLE_NAME_GROUP,
        },
    ];

    /// 编译规则
    pub fn compile(self) -> Result<CompiledRule, StatError> {
        let regex = Regex::new(self.pattern).map_err(|e| StatError::InvalidRule {
            kind: self.kind.to_string(),
            reason: e.to_string(),
        })?;
        Ok(CompiledRule { rule: self, regex })
    }
}

/// 已编译的语句规则
#[derive(Debug, Clone)]
pub struct CompiledRule {
    rule: StatementRule,
    regex: Regex,
}

impl CompiledRule {
    /// 规则定义
    pub fn rule(&self) -> &StatementRule {
        &self.rule
    }

    /// 按结构模式匹配一行，返回捕获到的表名
    ///
    /// 结构不完整（缺少 WHERE、表名未用反引号等）时返回 `None`。
    pub fn extract_table<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.regex
            .captures(line)
            .and_then(|caps| caps.name(self.rule.table_group))
            .map(|m| m.as_str())
    }
}

/// 一组按语句类型索引的规则
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// 从规则定义构建；同一类型出现多次时，先定义的规则优先
    pub fn from_rules<I>(rules: I) -> Result<Self, StatError>
    where
        I: IntoIterator<Item = StatementRule>,
    {
        let rules = rules
            .into_iter()
            .map(StatementRule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// 查找某类型的规则
    pub fn rule_for(&self, kind: CurdKind) -> Option<&CompiledRule> {
        self.rules.iter().find(|r| r.rule.kind == kind)
    }

    /// 用对应类型的规则提取表名
    pub fn extract_table<'a>(&self, kind: CurdKind, line: &'a str) -> Option<&'a str> {
        self.rule_for(kind).and_then(|r| r.extract_table(line))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// 默认规则集（惰性编译一次）
pub static DEFAULT_RULES: Lazy<RuleSet> = Lazy::new(|| {
    RuleSet::from_rules(StatementRule::MYSQL_DEFAULT).expect("default statement rules compile")
});

impl Default for RuleSet {
    fn default() -> Self {
        DEFAULT_RULES.clone()
    }
}
