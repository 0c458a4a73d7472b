use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::StatError;
use crate::parser::constants::{BINLOG_MAGIC, BINLOG_MAGIC_LENGTH};

/// 判断字节序列开头是否为原始 binlog 的魔数 `fe62696e`。
///
/// 只比较前 4 个字节，不足 4 字节时返回 `false`。
#[inline(always)]
pub fn is_binlog_magic(bytes: &[u8]) -> bool {
    bytes.len() >= BINLOG_MAGIC_LENGTH && bytes[..BINLOG_MAGIC_LENGTH] == BINLOG_MAGIC
}

/// 判断文件是否为未经 mysqlbinlog 导出的原始二进制 binlog 文件。
///
/// 单独打开文件，只读取前 4 个字节，不影响后续的逐行读取。
/// 文件无法打开时返回 `StatError::FileAccess`。
pub fn is_binlog_file<P: AsRef<Path>>(path: P) -> Result<bool, StatError> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| StatError::FileAccess(format!("{}: {}", path.display(), e)))?;

    let mut head = Vec::with_capacity(BINLOG_MAGIC_LENGTH);
    file.take(BINLOG_MAGIC_LENGTH as u64)
        .read_to_end(&mut head)
        .map_err(|e| StatError::FileAccess(format!("{}: {}", path.display(), e)))?;

    Ok(is_binlog_magic(&head))
}
