use super::*;
use crate::curd::CurdKind;
use crate::error::StatError;
use std::io::{self, Read};

fn read_all(input: &str) -> Vec<String> {
    LineReader::new(input.as_bytes())
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[test]
fn test_use_statement_basic() {
    assert_eq!(database_from_use_statement("USE `shop`;"), Some("shop"));
    assert_eq!(database_from_use_statement("use `shop_01`/*!*/;"), Some("shop_01"));
    assert_eq!(database_from_use_statement("Use   `crm`"), Some("crm"));
}

#[test]
fn test_use_statement_requires_backticks_and_line_start() {
    assert_eq!(database_from_use_statement("USE shop;"), None);
    assert_eq!(database_from_use_statement("# USE `shop`;"), None);
    assert_eq!(database_from_use_statement("USER `shop`"), None);
    assert_eq!(database_from_use_statement("USE ``"), None);
}

#[test]
fn test_classify_keywords() {
    assert_eq!(classify_statement("INSERT INTO `t` (a) VALUES (1)"), Some(CurdKind::Insert));
    assert_eq!(classify_statement("update `t` set a=1"), Some(CurdKind::Update));
    assert_eq!(classify_statement("Select 1"), Some(CurdKind::Select));
    assert_eq!(classify_statement("DELETE FROM t"), Some(CurdKind::Delete));
}

#[test]
fn test_classify_only_at_line_start() {
    assert_eq!(classify_statement("### INSERT INTO `t`"), None);
    assert_eq!(classify_statement(" SELECT 1"), None);
    assert_eq!(classify_statement("REPLACE INTO `t` VALUES (1)"), None);
    assert_eq!(classify_statement("BEGIN"), None);
    assert_eq!(classify_statement(""), None);
}

#[test]
fn test_classify_keyword_prefix_is_enough() {
    // 只看关键字，不要求后面有空白
    assert_eq!(classify_statement("SELECTED"), Some(CurdKind::Select));
}

#[test]
fn test_default_rules_cover_all_kinds() {
    let rules = RuleSet::default();
    assert_eq!(rules.len(), 4);
    for kind in CurdKind::ALL {
        assert_eq!(rules.rule_for(kind).unwrap().rule().kind, kind);
    }
}

#[test]
fn test_insert_rule() {
    let rules = RuleSet::default();
    assert_eq!(
        rules.extract_table(CurdKind::Insert, "INSERT INTO `orders` (id, name) VALUES (1, 'a');"),
        Some("orders")
    );
    assert_eq!(
        rules.extract_table(CurdKind::Insert, "insert into `orders`(id) values(1)"),
        Some("orders")
    );
    // 没有列清单
    assert_eq!(
        rules.extract_table(CurdKind::Insert, "INSERT INTO `orders` VALUES (1)"),
        None
    );
    // 表名未使用反引号
    assert_eq!(
        rules.extract_table(CurdKind::Insert, "INSERT INTO orders (id) VALUES (1)"),
        None
    );
}

#[test]
fn test_update_rule() {
    let rules = RuleSet::default();
    assert_eq!(
        rules.extract_table(CurdKind::Update, "UPDATE `users` SET name='x' WHERE id=1"),
        Some("users")
    );
    assert_eq!(
        rules.extract_table(CurdKind::Update, "UPDATE `users` SET name='x'"),
        None
    );
}

#[test]
fn test_select_rule() {
    let rules = RuleSet::default();
    assert_eq!(
        rules.extract_table(CurdKind::Select, "SELECT id, name FROM `users` WHERE id=1"),
        Some("users")
    );
    assert_eq!(rules.extract_table(CurdKind::Select, "SELECT 1"), None);
    assert_eq!(
        rules.extract_table(CurdKind::Select, "SELECT * FROM `users`"),
        None
    );
}

#[test]
fn test_delete_rule() {
    let rules = RuleSet::default();
    assert_eq!(
        rules.extract_table(CurdKind::Delete, "delete from `logs` where ts < 10"),
        Some("logs")
    );
    assert_eq!(rules.extract_table(CurdKind::Delete, "DELETE FROM `logs`"), None);
}

#[test]
fn test_rule_for_wrong_kind_does_not_match() {
    let rules = RuleSet::default();
    assert_eq!(
        rules.extract_table(CurdKind::Delete, "UPDATE `users` SET a=1 WHERE id=1"),
        None
    );
}

#[test]
fn test_custom_rule_set() {
    let rules = RuleSet::from_rules([StatementRule {
        kind: CurdKind::Insert,
        pattern: r"(?i)^INSERT\s+INTO\s+(?P<tbl>\w+)",
        table_group: "tbl",
    }])
    .unwrap();

    assert_eq!(rules.len(), 1);
    assert_eq!(
        rules.extract_table(CurdKind::Insert, "INSERT INTO orders VALUES (1)"),
        Some("orders")
    );
    assert!(rules.rule_for(CurdKind::Update).is_none());
}

#[test]
fn test_invalid_rule_pattern() {
    let result = RuleSet::from_rules([StatementRule {
        kind: CurdKind::Select,
        pattern: r"(?P<table_name>",
        table_group: "table_name",
    }]);
    assert!(matches!(result, Err(StatError::InvalidRule { .. })));
}

#[test]
fn test_line_reader_trims_and_counts() {
    let lines = read_all("  a  \r\n\tb\n\nc");
    assert_eq!(lines, vec!["a", "b", "", "c"]);
}

#[test]
fn test_line_reader_trailing_newline() {
    assert_eq!(read_all("a\n"), vec!["a"]);
    assert!(read_all("").is_empty());
}

#[test]
fn test_line_reader_cr_only_endings() {
    assert_eq!(
        read_all("USE `a`;\rDELETE FROM `t` WHERE id=1\r"),
        vec!["USE `a`;", "DELETE FROM `t` WHERE id=1"]
    );
}

#[test]
fn test_line_reader_mixed_endings() {
    assert_eq!(read_all("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
    // 连续两个 '\r' 之间是一个空行
    assert_eq!(read_all("a\r\rb"), vec!["a", "", "b"]);
    assert_eq!(read_all("a\n\rb"), vec!["a", "", "b"]);
}

#[test]
fn test_line_reader_crlf_split_across_buffer() {
    for capacity in 1..=4 {
        let lines: Vec<String> = LineReader::with_capacity(capacity, "ab\r\ncd\r\n".as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(lines, vec!["ab", "cd"], "capacity {}", capacity);
    }
}

#[test]
fn test_line_reader_small_buffer() {
    let input = "INSERT INTO `orders` (id) VALUES (1);\nUSE `shop`;\n";
    let lines: Vec<String> = LineReader::with_capacity(3, input.as_bytes())
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(lines, vec!["INSERT INTO `orders` (id) VALUES (1);", "USE `shop`;"]);
}

#[test]
fn test_line_reader_line_number() {
    let mut reader = LineReader::new("a\nb\nc".as_bytes());
    assert_eq!(reader.line_number(), 0);
    reader.next();
    reader.next();
    assert_eq!(reader.line_number(), 2);
}

#[test]
fn test_line_reader_invalid_utf8_stops() {
    let input: &[u8] = b"ok\n\xff\xfe\nnever";
    let mut reader = LineReader::new(input);
    assert_eq!(reader.next().unwrap().unwrap(), "ok");
    let err = reader.next().unwrap().unwrap_err();
    assert!(matches!(err, StatError::FileAccess(ref msg) if msg.contains("line 2")));
    assert!(reader.next().is_none());
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))
    }
}

#[test]
fn test_line_reader_io_error_stops() {
    let mut reader = LineReader::new(FailingReader);
    assert!(matches!(reader.next(), Some(Err(StatError::FileAccess(_)))));
    assert!(reader.next().is_none());
}
