//! 文件/目录过滤规则（目录黑名单、二进制扩展名、排除 glob、类型过滤）
//!
//! 黑名单在每次扫描开始时构建为 HashSet，查找为 O(1)。
use std::collections::HashSet;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::ScanError;
use crate::options::ScanOptions;

/// 默认跳过的目录名（构建产物、缓存、依赖、版本控制、IDE 元数据）
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[
    // 版本控制
    ".git", ".hg", ".svn", ".jj",
    // 依赖与虚拟环境
    "node_modules", "vendor", "venv", ".venv", "env", "site-packages", "bower_components",
    // 构建产物
    "target", "build", "dist", "out", "_build", ".next", ".nuxt", ".gradle",
    // 缓存
    "__pycache__", ".pytest_cache", ".mypy_cache", ".ruff_cache", ".tox", ".cache",
    // 本工具的索引目录
    ".hhg",
    // IDE
    ".idea", ".vscode", ".vs",
];

/// 默认跳过的扩展名（不含点，小写比较）
pub const DEFAULT_BINARY_EXTENSIONS: &[&str] = &[
    // 目标文件与可执行文件
    "o", "a", "so", "dylib", "dll", "exe", "obj", "lib", "class", "pyc", "pyo", "wasm", "bin",
    // 压缩包
    "zip", "tar", "gz", "tgz", "bz2", "xz", "7z", "rar", "jar", "war", "whl",
    // 文档
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx",
    // 图片
    "png", "jpg", "jpeg", "gif", "bmp", "ico", "webp", "tiff", "psd",
    // 音视频
    "mp3", "mp4", "wav", "flac", "ogg", "avi", "mov", "mkv", "webm",
    // 字体
    "ttf", "otf", "woff", "woff2", "eot",
    // 数据库
    "db", "sqlite", "sqlite3",
    // 序列化模型
    "onnx", "pt", "pth", "safetensors", "ckpt", "pkl", "npy", "npz", "h5",
    // 锁文件
    "lock",
];

/// 扩展名无法识别的锁文件
pub const DEFAULT_IGNORED_FILE_NAMES: &[&str] = &[
    "package-lock.json",
    "npm-shrinkwrap.json",
    "pnpm-lock.yaml",
    "go.sum",
];

/// 一次扫描使用的过滤器（构建后只读）
#[derive(Debug)]
pub struct FileFilter {
    ignored_dirs: HashSet<String>,
    binary_extensions: HashSet<String>,
    ignored_file_names: HashSet<String>,
    exclude: GlobSet,
    types: HashSet<String>,
}

impl FileFilter {
    /// 由扫描选项构建；排除 glob 不合法时返回错误
    pub fn from_options(opts: &ScanOptions) -> Result<Self, ScanError> {
        let mut builder = GlobSetBuilder::new();
        for pat in &opts.exclude {
            builder.add(Glob::new(pat)?);
        }
        Ok(Self {
            ignored_dirs: opts.ignored_dirs.iter().cloned().collect(),
            binary_extensions: opts.binary_extensions.iter().map(|e| normalize_ext(e)).collect(),
            ignored_file_names: opts.ignored_file_names.iter().cloned().collect(),
            exclude: builder.build()?,
            types: opts.types.iter().map(|e| normalize_ext(e)).collect(),
        })
    }

    /// 目录名是否在黑名单中（整棵子树被剪枝）
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignored_dirs.contains(name)
    }

    /// 文件是否可以进入候选集；`rel` 为相对扫描根的路径，用于 glob 匹配
    pub fn accepts_file(&self, name: &str, rel: &Path) -> bool {
        if self.ignored_file_names.contains(name) {
            return false;
        }
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        if let Some(ext) = &ext {
            if self.binary_extensions.contains(ext) {
                return false;
            }
        }
        if !self.types.is_empty() {
            match &ext {
                Some(ext) if self.types.contains(ext) => {}
                _ => return false,
            }
        }
        // 同时匹配文件名与相对路径，使 "test_*" 与 "src/**/gen.rs" 都能生效
        !(self.exclude.is_match(name) || self.exclude.is_match(rel))
    }
}

fn normalize_ext(ext: &str) -> String {
    ext.trim_start_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
