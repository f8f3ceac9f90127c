//! # MySQL Parser - Slowlog
//!
//! MySQL 慢查询日志解析库：把慢日志文件（纯文本或 gzip 压缩）转换为
//! 固定 schema 的类型化列式表，每条查询一行。面向需要对慢日志做
//! 统计聚合而不依赖专门 digest 工具的分析场景。
//!
//! ## 功能特性
//!
//! - **流式切分**: 分块读取 + 多字符分隔符切分，无需整文件载入内存
//! - **固定 schema**: 10 列类型化输出（时间戳、库名、SQL 文本、行计数器、耗时、标志位）
//! - **明确的缺失值策略**: 浮点列缺失为 null，整数列缺失为 0，布尔列缺失为 false
//! - **透明解压**: 路径以 `.gz` 结尾时自动解压
//!
//! ## 快速开始
//!
//! ```rust,no_run
//! use mysql_parser_slowlog::read_slowlog;
//!
//! let table = read_slowlog("mysql-slow.log", true)?;
//!
//! println!("共 {} 条慢查询", table.len());
//! for (ts, qt) in table.timestamp.iter().zip(&table.query_time) {
//!     println!("{ts}: {qt:?} 秒");
//! }
//! # Ok::<(), mysql_parser_slowlog::SlowlogError>(())
//! ```
//!
//! ### 从任意流读取
//!
//! 解压或其它来源由调用方处理时，直接传入实现了 `Read` 的流：
//!
//! ```rust
//! use mysql_parser_slowlog::read_slowlog_from;
//!
//! let log = "240101 09:15:30\n# Query_time: 0.5  Rows_examined: 10\nSELECT 1;\n";
//! let table = read_slowlog_from(log.as_bytes(), true)?;
//!
//! assert_eq!(table.len(), 1);
//! assert_eq!(table.rows_examined[0], 10);
//! # Ok::<(), mysql_parser_slowlog::SlowlogError>(())
//! ```
//!
//! ## 日志格式
//!
//! 支持的慢日志条目格式示例：
//!
//! ```text
//! # Time: 240101  9:15:30
//! # User@Host: root[root] @ localhost []
//! # Query_time: 0.5  Lock_time: 0.01  Rows_sent: 1  Rows_examined: 10
//! use mydb;
//! SET timestamp=1700000000;
//! SELECT * FROM orders WHERE status = 'open';
//! ```
//!
//! `use <db>;` 与 `SET timestamp=<n>;` 是会话上下文语句，不属于逻辑查询，
//! 会从保留的 SQL 文本中移除；`User@Host`、`Thread_id` 属性不进入输出表。

pub mod api;
pub mod constants;
pub mod error;
pub mod parser;
pub mod record;
pub mod scanner;
pub mod table;
mod tools;

pub use api::{read_slowlog, read_slowlog_from};
pub use error::SlowlogError;
pub use parser::parse_block;
pub use record::EntryRecord;
pub use scanner::BlockScanner;
pub use table::{COLUMN_NAMES, ColumnType, SCHEMA, SlowlogTable};
