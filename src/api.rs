//! 便捷 API 函数
//!
//! 打开慢日志文件（按 `.gz` 后缀自动解压），驱动
//! 扫描 -> 块解析 -> 类型强制 流水线，返回完整的列式表。

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::constants::ENTRY_DELIMITER;
use crate::error::SlowlogError;
use crate::parser::parse_block;
use crate::record::EntryRecord;
use crate::scanner::BlockScanner;
use crate::table::SlowlogTable;

/// 读取慢日志文件为列式表
///
/// 路径以 `.gz` 结尾时透明解压。`retain_sql` 为 false 时丢弃 SQL 文本
/// 以降低内存占用（`sqltext` 列为空字符串）。
///
/// 整个输入读完后一次性返回完整表，不暴露部分结果；打开或读取失败
/// 立即向调用方返回错误。
///
/// # 示例
///
/// ```rust,no_run
/// use mysql_parser_slowlog::read_slowlog;
///
/// let table = read_slowlog("mysql-slow.log", true)?;
/// println!("共 {} 条慢查询", table.len());
/// # Ok::<(), mysql_parser_slowlog::SlowlogError>(())
/// ```
pub fn read_slowlog<P: AsRef<Path>>(
    path: P,
    retain_sql: bool,
) -> Result<SlowlogTable, SlowlogError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SlowlogError::FileNotFound {
        path: format!("{}: {}", path.display(), e),
    })?;

    if path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
    {
        read_slowlog_from(GzDecoder::new(BufReader::new(file)), retain_sql)
    } else {
        read_slowlog_from(file, retain_sql)
    }
}

/// 从任意可读流读取慢日志
///
/// 解压由调用方负责，此处只要求一个字节可读的流。流被且只被读取一次，
/// 仅向前；每次调用持有独立的缓冲与累积状态，不同流上的并发调用互不影响。
///
/// # 示例
///
/// ```
/// use mysql_parser_slowlog::read_slowlog_from;
///
/// let log = "240101 09:15:30\n# Query_time: 0.5  Rows_sent: 1\nSELECT 1;\n";
/// let table = read_slowlog_from(log.as_bytes(), true)?;
///
/// assert_eq!(table.len(), 1);
/// assert_eq!(table.query_time[0], Some(0.5));
/// # Ok::<(), mysql_parser_slowlog::SlowlogError>(())
/// ```
pub fn read_slowlog_from<R: Read>(
    reader: R,
    retain_sql: bool,
) -> Result<SlowlogTable, SlowlogError> {
    let mut entries: Vec<EntryRecord> = Vec::new();

    for block in BlockScanner::new(reader, &ENTRY_DELIMITER) {
        let block = block.map_err(|e| SlowlogError::Io(e.to_string()))?;
        if let Some(entry) = parse_block(&block, retain_sql) {
            entries.push(entry);
        }
    }

    Ok(SlowlogTable::from_entries(entries))
}
