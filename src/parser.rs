//! 条目块解析
//!
//! 把扫描器产出的单个原始条目块解析为 [`EntryRecord`]：
//! 时间戳锚定、属性行提取、SQL 文本提取与清理。

use std::collections::HashMap;

use crate::constants::{
    ATTRIBUTE_PREFIX, EXCLUDED_ATTRIBUTES, KEY_VALUE_SEPARATOR, PAIR_SEPARATOR,
};
use crate::record::EntryRecord;
use crate::tools::{is_set_timestamp_line, is_use_line, parse_entry_header};

/// 解析单个条目块
///
/// 块首必须匹配时间戳头 `YYMMDD HH:MM:SS\n`，否则返回 `None` 表示跳过
/// （该块不是查询记录，例如服务器重启通告或文件首部的启动横幅）。
///
/// `retain_sql` 为 false 时不保留 SQL 文本（置为空字符串），以降低内存占用。
///
/// # 示例
///
/// ```
/// use mysql_parser_slowlog::parse_block;
///
/// let block = "240101 09:15:30\n# Query_time: 0.5  Rows_sent: 1\nSELECT 1";
/// let entry = parse_block(block, true).unwrap();
///
/// assert_eq!(entry.attribute("query_time"), Some("0.5"));
/// assert_eq!(entry.sqltext, "SELECT 1");
/// assert!(parse_block("Time: exceeded\n", true).is_none());
/// ```
pub fn parse_block(block: &str, retain_sql: bool) -> Option<EntryRecord> {
    let (timestamp, body_start) = parse_entry_header(block)?;
    let body = &block[body_start..];

    let (attributes, sql_start) = extract_attributes(body);

    let sqltext = if retain_sql {
        clean_sql(&body[sql_start..])
    } else {
        String::new()
    };

    Some(EntryRecord {
        timestamp,
        attributes,
        sqltext,
    })
}

/// 逐行提取属性行
///
/// 以 `# ` 开头的行是属性行，每行零个或多个键值对，对之间恰好两个空格，
/// 键与值之间为 `": "`（按第一次出现切分，值本身可以包含 `": "`）。
/// 缺少分隔符的键值对按策略跳过，不中断整个块的解析。
///
/// 返回属性映射和最后一个属性行（含行尾换行符）之后的偏移量，
/// 偏移量之后的内容即 SQL 文本。
fn extract_attributes(body: &str) -> (HashMap<String, String>, usize) {
    let mut attributes = HashMap::new();
    let mut sql_start = 0;
    let mut offset = 0;

    for line in body.split_inclusive('\n') {
        let line_end = offset + line.len();
        let content = line.strip_suffix('\n').unwrap_or(line);

        if let Some(rest) = content.strip_prefix(ATTRIBUTE_PREFIX) {
            for pair in rest.split(PAIR_SEPARATOR) {
                let Some((key, value)) = pair.split_once(KEY_VALUE_SEPARATOR) else {
                    continue;
                };
                let key = key.to_ascii_lowercase();
                if !EXCLUDED_ATTRIBUTES.contains(&key.as_str()) {
                    attributes.insert(key, value.to_string());
                }
            }
            sql_start = line_end;
        }

        offset = line_end;
    }

    (attributes, sql_start)
}

/// 应用两条清理替换
///
/// 日志会把会话上下文语句混入查询文本，它们不属于逻辑查询本身：
/// `use <db>;` 行与 `SET timestamp=<n>;` 行（大小写不敏感）被整行移除，
/// 连同行尾换行符一起。其余内容原样保留。
fn clean_sql(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len());
    for line in sql.split_inclusive('\n') {
        let content = line.strip_suffix('\n').unwrap_or(line);
        if is_use_line(content) || is_set_timestamp_line(content) {
            continue;
        }
        out.push_str(line);
    }
    out
}
