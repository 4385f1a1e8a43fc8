//! 目录遍历：显式栈深度优先，带符号链接环路保护
//!
//! 结果一次性收集为 Vec：并行引擎需要预先知道文件总数来分配结果槽位。
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::error::ScanError;
use crate::filter::FileFilter;
use crate::types::CandidateFile;

/// 已访问目录集合（规范化后的真实路径），仅在一次遍历内有效
#[derive(Debug, Default)]
pub(crate) struct VisitedSet {
    dirs: HashSet<PathBuf>,
}

impl VisitedSet {
    /// 首次见到该目录时返回 true；同一真实目录经由不同链接到达时只遍历一次
    pub(crate) fn insert(&mut self, canonical: PathBuf) -> bool {
        self.dirs.insert(canonical)
    }

    pub(crate) fn len(&self) -> usize {
        self.dirs.len()
    }
}

/// 候选文件枚举器
pub struct TreeWalker<'a> {
    filter: &'a FileFilter,
    include_hidden: bool,
}

impl<'a> TreeWalker<'a> {
    pub fn new(filter: &'a FileFilter, include_hidden: bool) -> Self {
        Self { filter, include_hidden }
    }

    /// 枚举 `root` 下的全部候选文件
    ///
    /// - 根路径不存在或不是文件/目录：返回 `ScanError::InvalidRoot`
    /// - 根路径是文件：返回只含该文件的候选集（不做过滤）
    /// - 无法读取的子目录：跳过该子树，继续遍历
    pub fn enumerate(&self, root: &Path) -> Result<Vec<CandidateFile>, ScanError> {
        let meta = fs::metadata(root).map_err(|e| ScanError::invalid_root(root, e.to_string()))?;
        let root = fs::canonicalize(root).map_err(|e| ScanError::invalid_root(root, e.to_string()))?;

        if meta.is_file() {
            return Ok(vec![CandidateFile { path: root, size: meta.len() }]);
        }
        if !meta.is_dir() {
            return Err(ScanError::invalid_root(root, "not a file or directory"));
        }

        let mut visited = VisitedSet::default();
        let mut files = Vec::new();
        let mut stack = vec![root.clone()];

        while let Some(dir) = stack.pop() {
            let canonical = match fs::canonicalize(&dir) {
                Ok(p) => p,
                Err(e) => {
                    debug!(dir = %dir.display(), error = %e, "cannot resolve directory, skipping");
                    continue;
                }
            };
            if !visited.insert(canonical) {
                trace!(dir = %dir.display(), "directory already visited");
                continue;
            }

            let subdirs = self.list_dir(&root, &dir, &mut files);
            // 逆序压栈，使子目录按名称顺序出栈
            stack.extend(subdirs.into_iter().rev());
        }

        debug!(
            root = %root.display(),
            dirs = visited.len(),
            files = files.len(),
            "enumeration finished"
        );
        Ok(files)
    }

    /// 列出单个目录：文件直接追加到 `files`，返回待访问的子目录（按名称排序）
    fn list_dir(&self, root: &Path, dir: &Path, files: &mut Vec<CandidateFile>) -> Vec<PathBuf> {
        let mut subdirs = Vec::new();
        let entries = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        for entry in entries {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    debug!(dir = %dir.display(), error = %e, "cannot list entry, skipping");
                    continue;
                }
            };
            let name = entry.file_name().to_string_lossy().into_owned();
            if !self.include_hidden && name.starts_with('.') {
                continue;
            }

            // 符号链接解析到目标；悬空链接直接跳过
            let meta = if entry.path_is_symlink() {
                fs::metadata(entry.path())
            } else {
                entry.metadata().map_err(std::io::Error::from)
            };
            let meta = match meta {
                Ok(m) => m,
                Err(e) => {
                    trace!(path = %entry.path().display(), error = %e, "cannot stat entry");
                    continue;
                }
            };

            if meta.is_dir() {
                if !self.filter.is_ignored_dir(&name) {
                    subdirs.push(entry.into_path());
                }
            } else if meta.is_file() {
                let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
                if self.filter.accepts_file(&name, rel) {
                    files.push(CandidateFile { path: entry.path().to_path_buf(), size: meta.len() });
                }
            }
        }
        subdirs
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
