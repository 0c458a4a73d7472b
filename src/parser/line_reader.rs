//! LineReader - 从 Reader 中逐行读取文本
//!
//! 基于 `BufReader::fill_buf` 与 `memchr2` 查找换行符（`\n`、`\r\n` 或单独的 `\r`），
//! 每次只在内存中保留一行，不会一次性加载整个文件。

use memchr::memchr2;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::error::StatError;
use crate::parser::constants::{DEFAULT_BUFFER_CAPACITY, LINE_BUFFER_CAPACITY};

/// 逐行读取的迭代器
///
/// 每一项是去掉首尾空白后的行内容。迭代器只能向前，读完后需要重新打开文件
/// 才能再次读取。遇到 I/O 错误或非 UTF-8 内容时返回一次 `Err` 后结束。
///
/// # 类型参数
///
/// * `R` - 实现了 `Read` trait 的类型
///
/// # 示例
///
/// ```
/// use binlog_curd_stat::LineReader;
///
/// let input = "USE `shop`;\n  SELECT 1  \n";
/// let lines: Vec<String> = LineReader::new(input.as_bytes())
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(lines, vec!["USE `shop`;", "SELECT 1"]);
/// ```
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    buf: Vec<u8>,
    finished: bool,
    skip_lf: bool,
    line_number: usize,
}

impl<R: Read> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_CAPACITY, reader)
    }

    /// 指定底层缓冲区大小
    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity.max(1), reader),
            buf: Vec::with_capacity(LINE_BUFFER_CAPACITY),
            finished: false,
            skip_lf: false,
            line_number: 0,
        }
    }

    /// 已经读出的行数
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// 读取下一行原始字节（不含换行符）到 `self.buf`
    ///
    /// `\n`、`\r\n` 和单独的 `\r` 都视为换行。文件结束且没有剩余字节时返回 `Ok(false)`。
    fn read_raw_line(&mut self) -> io::Result<bool> {
        self.buf.clear();

        // 上一行以 '\r' 结束时，紧随其后的 '\n' 属于同一个换行
        if self.skip_lf {
            self.skip_lf = false;
            if self.reader.fill_buf()?.first() == Some(&b'\n') {
                self.reader.consume(1);
            }
        }

        loop {
            let available = self.reader.fill_buf()?;

            if available.is_empty() {
                // EOF：最后一行可能没有换行符
                return Ok(!self.buf.is_empty());
            }

            match memchr2(b'\n', b'\r', available) {
                Some(idx) => {
                    self.skip_lf = available[idx] == b'\r';
                    self.buf.extend_from_slice(&available[..idx]);
                    self.reader.consume(idx + 1);
                    return Ok(true);
                }
                None => {
                    let len = available.len();
                    self.buf.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = Result<String, StatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.read_raw_line() {
            Ok(true) => {}
            Ok(false) => {
                self.finished = true;
                return None;
            }
            Err(e) => {
                self.finished = true;
                return Some(Err(StatError::FileAccess(format!(
                    "line {}: {}",
                    self.line_number + 1,
                    e
                ))));
            }
        }

        self.line_number += 1;

        match std::str::from_utf8(&self.buf) {
            Ok(line) => Some(Ok(line.trim().to_string())),
            Err(e) => {
                self.finished = true;
                Some(Err(StatError::FileAccess(format!(
                    "line {}: invalid UTF-8: {}",
                    self.line_number, e
                ))))
            }
        }
    }
}

/// 打开文件并返回逐行迭代器
///
/// # 参数
///
/// * `path` - 文本文件路径
///
/// # 返回
///
/// * `Ok(LineReader)` - 流式读取的迭代器
/// * `Err(StatError::FileAccess)` - 文件无法打开
pub fn iter_lines_from_file<P: AsRef<Path>>(path: P) -> Result<LineReader<File>, StatError> {
    iter_lines_from_file_with_capacity(path, DEFAULT_BUFFER_CAPACITY)
}

/// 与 [`iter_lines_from_file`] 相同，但可指定缓冲区大小
pub fn iter_lines_from_file_with_capacity<P: AsRef<Path>>(
    path: P,
    capacity: usize,
) -> Result<LineReader<File>, StatError> {
    let path_ref = path.as_ref();
    let file = File::open(path_ref)
        .map_err(|e| StatError::FileAccess(format!("{}: {}", path_ref.display(), e)))?;
    Ok(LineReader::with_capacity(capacity, file))
}
