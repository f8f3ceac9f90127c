//! 条目记录结构
//!
//! `EntryRecord` 是块解析器的输出：一条慢查询的中间表示，
//! 属性值仍为原始字符串，由 `table` 模块统一做类型强制。

use chrono::NaiveDateTime;
use std::collections::HashMap;

/// 一条解析后的慢日志条目
///
/// 每个到达此阶段的条目都带有有效时间戳；无时间戳头的块
/// （服务器重启通告等）在块解析时已被跳过。
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntryRecord {
    /// 时间戳，由两位年份头推导（`2000 + YY`）
    pub timestamp: NaiveDateTime,

    /// 属性映射：小写键 -> 原始字符串值
    ///
    /// 已应用排除集（`user@host`、`thread_id` 不保留）；
    /// 同一块内同键后写覆盖先写。
    pub attributes: HashMap<String, String>,

    /// 清理后的 SQL 文本；关闭 SQL 保留时为空字符串
    pub sqltext: String,
}

impl EntryRecord {
    /// 按名称取属性原始值
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}
