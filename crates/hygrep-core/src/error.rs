//! 扫描级致命错误
//!
//! 单文件的读取失败不会出现在这里：它们在引擎内部被吸收为“未命中”。
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// 根路径不存在，或既不是文件也不是目录
    #[error("invalid root path {}: {reason}", path.display())]
    InvalidRoot { path: PathBuf, reason: String },

    /// 正则编译失败
    #[error("invalid search pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// 排除 glob 无法编译
    #[error("invalid exclude glob: {0}")]
    Exclude(#[from] globset::Error),

    #[error("failed to build worker pool: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

impl ScanError {
    pub(crate) fn invalid_root(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidRoot { path: path.into(), reason: reason.into() }
    }
}
