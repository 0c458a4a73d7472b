//! 解析器使用的常量定义
//!
//! 定义了二进制魔数、各类语句的正则模式以及预编译的正则表达式。

use once_cell::sync::Lazy;
use regex::Regex;

// 二进制 binlog 相关常量

/// 原始 binlog 文件头部魔数（十六进制 `fe62696e`，即 `\xfe` + "bin"）
pub const BINLOG_MAGIC: [u8; 4] = [0xfe, 0x62, 0x69, 0x6e];

/// 魔数长度
pub const BINLOG_MAGIC_LENGTH: usize = 4;

// 读取相关常量

/// 行读取器默认缓冲区大小
pub const DEFAULT_BUFFER_CAPACITY: usize = 256 * 1024;

/// 单行缓冲区的预分配大小
pub const LINE_BUFFER_CAPACITY: usize = 4096;

// 正则模式

/// 切换数据库指令：USE `db`
pub const USE_DATABASE_PATTERN: &str = r"(?i)^USE\s+`(\w+)`";

/// 语句类型关键字（只看行首）
pub const CURD_KEYWORD_PATTERN: &str = r"(?i)^(?:INSERT|UPDATE|SELECT|DELETE)";

/// INSERT INTO `t` (...) VALUES (...)
pub const INSERT_PATTERN: &str =
    r"(?i)^INSERT\s+INTO\s+`(?P<table_name>\w+)`\s*\((.+?)\)\s*VALUES\s*\((.+?)\)";

/// UPDATE `t` SET ... WHERE ...
pub const UPDATE_PATTERN: &str = r"(?i)^UPDATE\s+`(?P<table_name>\w+)`\s+SET\s+(.+?)\s+WHERE\s+(.+?)$";

/// SELECT ... FROM `t` WHERE ...
pub const SELECT_PATTERN: &str = r"(?i)^SELECT\s+(.+?)\s+FROM\s+`(?P<table_name>\w+)`\s+WHERE\s+(.+?)$";

/// DELETE FROM `t` WHERE ...
pub const DELETE_PATTERN: &str = r"(?i)^DELETE\s+FROM\s+`(?P<table_name>\w+)`\s+WHERE\s+(.+?)$";

/// 表名捕获组名称
pub const TABLE_NAME_GROUP: &str = "table_name";

// 使用 Lazy 静态初始化正则，避免每行重复编译

/// 预编译的 USE 指令正则
pub static USE_DATABASE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(USE_DATABASE_PATTERN).expect("USE pattern is valid"));

/// 预编译的语句关键字正则
pub static CURD_KEYWORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(CURD_KEYWORD_PATTERN).expect("keyword pattern is valid"));
