//! 单文件处理流水线：打开 → 取大小 → 读取 → 二进制判定 → 匹配
//!
//! 任何单文件错误都被吸收为“未命中”，不会中断整个扫描。
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::trace;

use crate::matcher::TextMatcher;
use crate::types::CandidateFile;

/// 二进制判定只抽样前 8KiB
pub(crate) const BINARY_SNIFF_LEN: usize = 8 * 1024;

/// 判定缓冲区是否为二进制：抽样区间内出现 NUL 字节即视为二进制
pub(crate) fn is_binary(buf: &[u8]) -> bool {
    let sample = &buf[..buf.len().min(BINARY_SNIFF_LEN)];
    memchr::memchr(0, sample).is_some()
}

/// 读取整个文件，超过 `max_size` 时返回 `Ok(None)`
///
/// 先用已打开句柄的元数据判断大小，超限的文件不会被读入内存；
/// 读取时最多取 `max_size + 1` 字节，防止文件在 stat 之后变大。
pub(crate) fn read_bounded(path: &Path, max_size: u64) -> io::Result<Option<Vec<u8>>> {
    let file = File::open(path)?;
    let len = file.metadata()?.len();
    if len > max_size {
        return Ok(None);
    }

    let mut buf = Vec::with_capacity(len as usize);
    file.take(max_size.saturating_add(1)).read_to_end(&mut buf)?;
    if buf.len() as u64 > max_size {
        return Ok(None);
    }
    Ok(Some(buf))
}

/// 处理单个候选文件；命中时返回文件内容，其余情况返回 None
pub(crate) fn probe(file: &CandidateFile, matcher: &TextMatcher, max_size: u64) -> Option<Vec<u8>> {
    let content = match read_bounded(&file.path, max_size) {
        Ok(Some(buf)) => buf,
        Ok(None) => {
            trace!(path = %file.path.display(), "file over size limit");
            return None;
        }
        Err(e) => {
            trace!(path = %file.path.display(), error = %e, "cannot read file");
            return None;
        }
    };

    if is_binary(&content) {
        trace!(path = %file.path.display(), "binary content");
        return None;
    }

    matcher.matches(&content).then_some(content)
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
