//! 配置文件加载（TOML）
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::options::ScanOptions;

/// 配置文件结构；所有字段可选，未出现的字段保持默认值
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub max_file_size: Option<u64>,
    #[serde(default)]
    pub threads: Option<usize>,
    #[serde(default)]
    pub include_hidden: Option<bool>,
    /// 追加到内置目录黑名单
    #[serde(default)]
    pub ignored_dirs: Vec<String>,
    /// 追加到内置扩展名黑名单
    #[serde(default)]
    pub binary_extensions: Vec<String>,
    /// 追加到内置锁文件名单
    #[serde(default)]
    pub ignored_file_names: Vec<String>,
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
}

impl FileConfig {
    /// 合并到扫描选项（列表字段追加，标量字段覆盖）
    pub fn apply(self, opts: &mut ScanOptions) {
        if let Some(max) = self.max_file_size {
            opts.max_file_size = max;
        }
        if self.threads.is_some() {
            opts.threads = self.threads;
        }
        opts.ignored_dirs.extend(self.ignored_dirs);
        opts.binary_extensions.extend(self.binary_extensions);
        opts.ignored_file_names.extend(self.ignored_file_names);
        opts.exclude.extend(self.exclude);
        opts.types.extend(self.types);
    }
}

/// 从 TOML 配置文件加载
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let txt = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    parse_config(&txt).with_context(|| format!("parse config {}", path.display()))
}

pub fn parse_config(txt: &str) -> Result<FileConfig> {
    Ok(toml::from_str(txt)?)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
