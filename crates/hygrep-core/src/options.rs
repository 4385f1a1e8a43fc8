//! 扫描选项与统计信息（模块）
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::filter::{DEFAULT_BINARY_EXTENSIONS, DEFAULT_IGNORED_DIRS, DEFAULT_IGNORED_FILE_NAMES};

/// 默认文件大小上限（字节），超过则跳过且不读入内存
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1_000_000;

/// 扫描选项
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// 最大文件大小（字节）；恰好等于上限的文件仍会扫描
    pub max_file_size: u64,
    /// 线程数：None 表示自动（等于 CPU 核数）
    pub threads: Option<usize>,
    /// 跳过的目录名（默认值见 `DEFAULT_IGNORED_DIRS`）
    pub ignored_dirs: Vec<String>,
    /// 跳过的扩展名（默认值见 `DEFAULT_BINARY_EXTENSIONS`）
    pub binary_extensions: Vec<String>,
    /// 按完整文件名跳过（默认值见 `DEFAULT_IGNORED_FILE_NAMES`）
    pub ignored_file_names: Vec<String>,
    /// 排除 glob，同时匹配文件名与相对路径
    pub exclude: Vec<String>,
    /// 只保留这些扩展名；为空表示不限制
    pub types: Vec<String>,
    /// 协作式取消：worker 每处理一个文件前检查一次
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            threads: None,
            ignored_dirs: DEFAULT_IGNORED_DIRS.iter().map(|s| s.to_string()).collect(),
            binary_extensions: DEFAULT_BINARY_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            ignored_file_names: DEFAULT_IGNORED_FILE_NAMES.iter().map(|s| s.to_string()).collect(),
            exclude: Vec::new(),
            types: Vec::new(),
            cancel: None,
        }
    }
}

impl ScanOptions {
    /// 实际使用的 worker 数（至少为 1）
    pub fn worker_count(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }
}

/// 扫描统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// 遍历得到的候选文件数
    pub candidates: usize,
    /// 命中的文件数
    pub matched: usize,
}
