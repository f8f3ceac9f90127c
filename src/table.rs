//! 固定输出 schema 与类型强制
//!
//! 定义 10 列的固定输出 schema，并把块解析器累积的原始字符串记录
//! 一次性强制为类型化的列式表（struct-of-arrays）。
//!
//! 缺失/非法值策略（按列类型，刻意不对称）：
//! - 浮点列：缺失或解析失败为 `None` —— 测量值，"未测量"不同于零
//! - 整数列：缺失或解析失败为 `0` —— 计数器，"未上报"按"未发生"处理
//! - 布尔列：缺失默认为 `false`；`yes`/`true`/`1`（大小写不敏感）为 `true`，其余为 `false`
//! - 字符串列：原样传递，缺失为空字符串
//! - 时间戳列：永不缺失（块解析阶段已过滤无时间戳的块）

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;

use crate::record::EntryRecord;

/// 列的语义类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// 时间戳列
    Timestamp,
    /// 字符串列
    Str,
    /// 整数计数器列
    Int,
    /// 浮点测量值列
    Float,
    /// 布尔标志列
    Bool,
}

/// 输出 schema：列名 -> 语义类型，顺序即最终表的列顺序
pub static SCHEMA: Lazy<[(&'static str, ColumnType); 10]> = Lazy::new(|| {
    [
        ("timestamp", ColumnType::Timestamp),
        ("schema", ColumnType::Str),
        ("sqltext", ColumnType::Str),
        ("rows_sent", ColumnType::Int),
        ("rows_examined", ColumnType::Int),
        ("tmp_table_sizes", ColumnType::Int),
        ("query_time", ColumnType::Float),
        ("lock_time", ColumnType::Float),
        ("tmp_table_on_disk", ColumnType::Bool),
        ("full_scan", ColumnType::Bool),
    ]
});

/// 按 schema 顺序排列的列名
pub static COLUMN_NAMES: Lazy<[&'static str; 10]> = Lazy::new(|| {
    let mut names = [""; 10];
    for (i, (name, _)) in SCHEMA.iter().enumerate() {
        names[i] = *name;
    }
    names
});

/// 最终的列式表
///
/// 固定有序的类型化列集合，行数等于被接受的条目数。
/// 每次 `read` 调用构建一次，构建后本 crate 不再修改。
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlowlogTable {
    /// 查询时间戳
    pub timestamp: Vec<NaiveDateTime>,
    /// 受影响的库名（属性未提供时为空字符串）
    pub schema: Vec<String>,
    /// 清理后的 SQL 文本（关闭 SQL 保留时为空字符串）
    pub sqltext: Vec<String>,
    /// 返回的行数
    pub rows_sent: Vec<i64>,
    /// 检查的行数
    pub rows_examined: Vec<i64>,
    /// 临时表大小
    pub tmp_table_sizes: Vec<i64>,
    /// 查询耗时（秒）
    pub query_time: Vec<Option<f64>>,
    /// 锁等待耗时（秒）
    pub lock_time: Vec<Option<f64>>,
    /// 临时表是否落盘
    pub tmp_table_on_disk: Vec<bool>,
    /// 是否全表扫描
    pub full_scan: Vec<bool>,
}

impl SlowlogTable {
    /// 对完整累积的条目集执行一次类型强制，构建最终表
    pub fn from_entries(entries: Vec<EntryRecord>) -> Self {
        let mut table = Self::with_capacity(entries.len());
        for entry in entries {
            table.push_entry(entry);
        }
        table
    }

    /// 行数
    pub fn len(&self) -> usize {
        self.timestamp.len()
    }

    /// 是否为空表
    pub fn is_empty(&self) -> bool {
        self.timestamp.is_empty()
    }

    fn with_capacity(rows: usize) -> Self {
        Self {
            timestamp: Vec::with_capacity(rows),
            schema: Vec::with_capacity(rows),
            sqltext: Vec::with_capacity(rows),
            rows_sent: Vec::with_capacity(rows),
            rows_examined: Vec::with_capacity(rows),
            tmp_table_sizes: Vec::with_capacity(rows),
            query_time: Vec::with_capacity(rows),
            lock_time: Vec::with_capacity(rows),
            tmp_table_on_disk: Vec::with_capacity(rows),
            full_scan: Vec::with_capacity(rows),
        }
    }

    fn push_entry(&mut self, entry: EntryRecord) {
        self.schema
            .push(entry.attribute("schema").unwrap_or("").to_string());
        self.rows_sent.push(coerce_int(entry.attribute("rows_sent")));
        self.rows_examined
            .push(coerce_int(entry.attribute("rows_examined")));
        self.tmp_table_sizes
            .push(coerce_int(entry.attribute("tmp_table_sizes")));
        self.query_time
            .push(coerce_float(entry.attribute("query_time")));
        self.lock_time
            .push(coerce_float(entry.attribute("lock_time")));
        self.tmp_table_on_disk
            .push(coerce_bool(entry.attribute("tmp_table_on_disk")));
        self.full_scan
            .push(coerce_bool(entry.attribute("full_scan")));
        self.timestamp.push(entry.timestamp);
        self.sqltext.push(entry.sqltext);
    }
}

/// 整数列强制：缺失或解析失败默认为 0
fn coerce_int(value: Option<&str>) -> i64 {
    value.and_then(|v| v.trim().parse::<i64>().ok()).unwrap_or(0)
}

/// 浮点列强制：缺失或解析失败为 None，不是零
fn coerce_float(value: Option<&str>) -> Option<f64> {
    value.and_then(|v| v.trim().parse::<f64>().ok())
}

/// 布尔列强制：缺失默认为 false
fn coerce_bool(value: Option<&str>) -> bool {
    match value {
        Some(v) => matches!(
            v.trim().to_ascii_lowercase().as_str(),
            "yes" | "true" | "1"
        ),
        None => false,
    }
}
