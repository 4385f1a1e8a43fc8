//! 单元测试共用工具

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;
use std::path::Path;

/// 按 (路径, 内容) 列表创建目录树，父目录自动创建
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// 输出相对 root 的路径（"/" 分隔），保持原顺序
pub fn relative_names<'a>(root: &Path, paths: impl Iterator<Item = &'a Path>) -> Vec<String> {
    let root = fs::canonicalize(root).unwrap();
    paths
        .map(|p| {
            let rel = p.strip_prefix(&root).unwrap_or(p);
            rel.components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect()
}
