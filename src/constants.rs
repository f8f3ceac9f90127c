//! 解析器使用的常量定义
//!
//! 定义了切分与解析过程中使用的所有常量：分块大小、条目分隔符、
//! 属性行格式以及排除的属性键。进程范围内只读共享。

use once_cell::sync::Lazy;

// 扫描相关常量

/// 默认分块读取大小（字节），用于摊薄底层 I/O 调用开销
pub const READ_CHUNK_SIZE: usize = 40000;

/// 条目时间标记，每条慢日志条目以该标记开头
pub const TIME_MARKER: &str = "# Time: ";

/// 条目分隔符：语句结尾的 `;` 换行后紧跟下一条目的时间标记
pub static ENTRY_DELIMITER: Lazy<String> = Lazy::new(|| format!(";\n{TIME_MARKER}"));

// 属性行相关常量

/// 属性行前缀
pub const ATTRIBUTE_PREFIX: &str = "# ";

/// 同一属性行内键值对之间的分隔符（恰好两个空格）
pub const PAIR_SEPARATOR: &str = "  ";

/// 键与值之间的分隔符
pub const KEY_VALUE_SEPARATOR: &str = ": ";

/// 排除的属性键（纯会话信息，不进入输出表）
pub static EXCLUDED_ATTRIBUTES: Lazy<[&'static str; 2]> =
    Lazy::new(|| ["user@host", "thread_id"]);
