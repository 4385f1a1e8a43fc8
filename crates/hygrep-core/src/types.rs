//! 公共类型（对外暴露）
use std::borrow::Cow;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::options::ScanStats;

/// 一次扫描请求，构建后不可变
#[derive(Debug, Clone)]
pub struct ScanRequest {
    root: PathBuf,
    pattern: String,
    include_hidden: bool,
}

impl ScanRequest {
    pub fn new(root: impl Into<PathBuf>, pattern: impl Into<String>, include_hidden: bool) -> Self {
        Self { root: root.into(), pattern: pattern.into(), include_hidden }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn include_hidden(&self) -> bool {
        self.include_hidden
    }
}

/// 遍历阶段产出的候选文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub size: u64,
}

/// 命中的文件及其完整内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanMatch {
    pub path: PathBuf,
    pub content: Vec<u8>,
}

impl ScanMatch {
    /// 以 UTF-8 视图读取内容（非法字节有损替换）
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }
}

/// 扫描结果：按遍历顺序排列的命中项
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub matches: Vec<ScanMatch>,
    pub stats: ScanStats,
}

impl ScanResult {
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.matches.iter().map(|m| m.path.as_path())
    }
}

impl IntoIterator for ScanResult {
    type Item = ScanMatch;
    type IntoIter = std::vec::IntoIter<ScanMatch>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

/// 输出项结构（对应 `--json` 输出的单个元素）
#[derive(Debug, Clone, Serialize)]
pub struct OutputItem<'a> {
    pub file: &'a str,
    pub size: usize,
}
