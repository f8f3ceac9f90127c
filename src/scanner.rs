//! 分块分隔符扫描器
//!
//! 以固定大小的块从字节流中拉取数据，按多字符分隔符把任意长度的输入
//! 切分为连续的条目块，跨块边界缓冲不完整数据，无需整文件载入内存。

use memchr::memmem::Finder;
use std::io::{self, Read};

use crate::constants::READ_CHUNK_SIZE;

/// 基于分隔符的条目块扫描器
///
/// 产出一个惰性、有限、不可重启的子串序列：把分隔符重新插回相邻子串
/// 之间即可精确还原原始流内容。分隔符本身不出现在任何子串中；最后一个
/// 子串（可能为空）是最后一次分隔符出现之后的全部内容，即使流不以
/// 分隔符结尾也会产出。
///
/// 切分结果与底层块大小无关：分隔符跨越两次物理读取时同样被正确识别。
/// 内存占用上界为一个未完结的条目块加一个读取块。
///
/// 扫描器持有内部缓冲状态，不可在并发消费者之间共享；每个流各用一个实例。
pub struct BlockScanner<R: Read> {
    reader: R,
    finder: Finder<'static>,
    delimiter_len: usize,
    buf: Vec<u8>,
    chunk: Vec<u8>,
    /// 上次未命中后可以安全跳过的已搜索前缀
    search_from: usize,
    eof: bool,
    finished: bool,
}

impl<R: Read> BlockScanner<R> {
    /// 用默认块大小创建扫描器
    ///
    /// # Panics
    ///
    /// 分隔符为空时 panic。
    pub fn new(reader: R, delimiter: &str) -> Self {
        Self::with_chunk_size(reader, delimiter, READ_CHUNK_SIZE)
    }

    /// 指定块大小创建扫描器（主要用于验证跨块边界的切分行为）
    ///
    /// # Panics
    ///
    /// 分隔符为空或块大小为 0 时 panic。
    pub fn with_chunk_size(reader: R, delimiter: &str, chunk_size: usize) -> Self {
        assert!(!delimiter.is_empty(), "delimiter must not be empty");
        assert!(chunk_size > 0, "chunk size must be positive");

        Self {
            reader,
            finder: Finder::new(delimiter.as_bytes()).into_owned(),
            delimiter_len: delimiter.len(),
            buf: Vec::with_capacity(chunk_size),
            chunk: vec![0u8; chunk_size],
            search_from: 0,
            eof: false,
            finished: false,
        }
    }

    /// 取出 `end` 之前的块内容，并连同分隔符一起从缓冲中移除
    fn take_block(&mut self, end: usize) -> String {
        let block = String::from_utf8_lossy(&self.buf[..end]).into_owned();
        self.buf.drain(..end + self.delimiter_len);
        self.search_from = 0;
        block
    }
}

impl<R: Read> Iterator for BlockScanner<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            // 缓冲中包含分隔符时，产出其前缀
            if let Some(pos) = self.finder.find(&self.buf[self.search_from..]) {
                let end = self.search_from + pos;
                return Some(Ok(self.take_block(end)));
            }

            if self.eof {
                // 流已耗尽：产出剩余内容作为最后一个块（可能为空）
                self.finished = true;
                let rest = String::from_utf8_lossy(&self.buf).into_owned();
                self.buf.clear();
                return Some(Ok(rest));
            }

            // 未命中时只有缓冲末尾 delimiter_len - 1 字节可能与下个块拼出分隔符
            self.search_from = self.buf.len().saturating_sub(self.delimiter_len - 1);

            match self.reader.read(&mut self.chunk) {
                Ok(0) => self.eof = true,
                Ok(n) => self.buf.extend_from_slice(&self.chunk[..n]),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(content: &str, delimiter: &str, chunk_size: usize) -> Vec<String> {
        BlockScanner::with_chunk_size(content.as_bytes(), delimiter, chunk_size)
            .map(|r| r.unwrap())
            .collect()
    }

    #[test]
    fn splits_on_delimiter() {
        let blocks = scan("aa|bb|cc", "|", 8);
        assert_eq!(blocks, ["aa", "bb", "cc"]);
    }

    #[test]
    fn leading_delimiter_yields_empty_block() {
        let blocks = scan("|aa", "|", 8);
        assert_eq!(blocks, ["", "aa"]);
    }

    #[test]
    fn no_delimiter_yields_whole_stream() {
        let blocks = scan("abcdef", "|", 2);
        assert_eq!(blocks, ["abcdef"]);
    }

    #[test]
    fn trailing_delimiter_yields_empty_final_block() {
        let blocks = scan("aa;\nxbb;\nx", ";\nx", 4);
        assert_eq!(blocks, ["aa", "bb", ""]);
    }

    #[test]
    fn empty_stream_yields_single_empty_block() {
        let blocks = scan("", "|", 8);
        assert_eq!(blocks, [""]);
    }

    #[test]
    fn delimiter_straddles_chunk_boundary() {
        // 块大小 1：分隔符的每个字节都在不同的物理读取中到达
        let blocks = scan("one;\n# Time: two", ";\n# Time: ", 1);
        assert_eq!(blocks, ["one", "two"]);
    }

    #[test]
    fn read_error_is_propagated() {
        struct FailingReader;
        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("stream broken"))
            }
        }

        let mut scanner = BlockScanner::with_chunk_size(FailingReader, "|", 8);
        assert!(scanner.next().unwrap().is_err());
        assert!(scanner.next().is_none());
    }
}
