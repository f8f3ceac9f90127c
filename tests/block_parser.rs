//! 块解析器的集成测试
//!
//! 覆盖时间戳推导、属性排除、SQL 清理与跳过语义。

use chrono::NaiveDate;
use mysql_parser_slowlog::parse_block;

#[test]
fn timestamp_derivation() {
    // 头部 `240101 09:15:30` 推导为 2024-01-01T09:15:30
    let entry = parse_block("240101 09:15:30\nSELECT 1;\n", true).unwrap();
    assert_eq!(
        entry.timestamp,
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(9, 15, 30)
            .unwrap()
    );
}

#[test]
fn user_host_attribute_is_excluded() {
    let block = "240101 09:15:30\n\
                 # User@Host: root[root] @ localhost []\n\
                 # Query_time: 0.5\n\
                 SELECT 1;\n";
    let entry = parse_block(block, true).unwrap();
    assert_eq!(entry.attribute("user@host"), None);
    assert_eq!(entry.attribute("query_time"), Some("0.5"));
}

#[test]
fn sql_cleanup_removes_session_context_lines() {
    let block = "240101 09:15:30\n\
                 # Query_time: 0.5\n\
                 use mydb;\n\
                 SET timestamp=1700000000;\n\
                 SELECT 1;\n";
    let entry = parse_block(block, true).unwrap();
    assert_eq!(entry.sqltext, "SELECT 1;\n");
}

#[test]
fn schema_attribute_flows_through() {
    let block = "240101 09:15:30\n# Schema: orders  Last_errno: 0\nSELECT 1;\n";
    let entry = parse_block(block, true).unwrap();
    assert_eq!(entry.attribute("schema"), Some("orders"));
}

#[test]
fn block_without_two_digit_year_header_is_skipped() {
    // 重启通告等非查询记录：无有效时间戳头，贡献零行
    assert!(parse_block("Time: exceeded\nrestart in progress\n", true).is_none());
}
