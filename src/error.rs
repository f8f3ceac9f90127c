//! 错误类型定义
//!
//! 定义了慢日志读取过程中可能出现的所有错误类型。
//! 无时间戳头的块不是错误，会被静默跳过。

use thiserror::Error;

/// 慢日志读取错误类型
///
/// I/O 错误以展示字符串保存，使错误类型保持 `Clone + PartialEq`。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlowlogError {
    /// 文件未找到或无法打开
    #[error("file not found or inaccessible: {path}")]
    FileNotFound {
        /// 文件路径及底层错误描述
        path: String,
    },

    /// 底层流读取错误（包括解压失败），整个 read 调用终止
    #[error("i/o error while reading log stream: {0}")]
    Io(String),
}
