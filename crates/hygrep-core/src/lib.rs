//! 召回扫描库
//!
//! 设计要点：
//! - 遍历：显式栈深度优先，规范化路径去重，防止符号链接环路。
//! - 过滤：目录黑名单、二进制扩展名、隐藏文件策略在读取内容之前生效。
//! - 匹配：纯字面量走 memmem 子串搜索，其余编译为大小写不敏感的正则。
//! - 并行：结果槽位按下标区间切分给各 worker，无锁写入，汇合后按遍历顺序收集。
//! - 单文件错误一律视为未命中；只有根路径非法和模式编译失败会中止扫描。

mod config;
mod engine;
mod error;
mod filter;
mod matcher;
mod options;
mod pattern;
mod scan;
mod types;
mod walker;

#[cfg(test)]
mod test_utils;

pub use config::{load_config, parse_config, FileConfig};
pub use error::ScanError;
pub use filter::{FileFilter, DEFAULT_BINARY_EXTENSIONS, DEFAULT_IGNORED_DIRS, DEFAULT_IGNORED_FILE_NAMES};
pub use matcher::{LiteralMatcher, PatternMatcher, TextMatcher};
pub use options::{ScanOptions, ScanStats, DEFAULT_MAX_FILE_SIZE};
pub use pattern::{classify, PatternKind};
pub use scan::{scan, scan_candidates, scan_with};
pub use types::{CandidateFile, OutputItem, ScanMatch, ScanRequest, ScanResult};
pub use walker::TreeWalker;
