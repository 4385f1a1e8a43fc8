//! 文本匹配器（字面量 / 正则两种策略）
//!
//! 两种策略都只做 ASCII 大小写折叠：'A'..='Z' 映射到 'a'..='z'，其他字节原样保留。
//! 正则侧关闭 Unicode 模式，保证纯字面量模式在两条路径上结果一致。
use memchr::memmem;
use regex::bytes::{Regex, RegexBuilder};

use crate::error::ScanError;
use crate::pattern::{classify, PatternKind};

/// 大小写不敏感的字面量子串匹配
#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    finder: memmem::Finder<'static>,
}

impl LiteralMatcher {
    pub fn new(pattern: &str) -> Self {
        // 模式只折叠一次
        let needle = pattern.as_bytes().to_ascii_lowercase();
        Self { finder: memmem::Finder::new(&needle).into_owned() }
    }

    pub fn matches(&self, content: &[u8]) -> bool {
        let folded = content.to_ascii_lowercase();
        self.finder.find(&folded).is_some()
    }
}

/// 大小写不敏感的正则匹配（只判断是否命中，不需要捕获组）
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    regex: Regex,
}

impl PatternMatcher {
    pub fn new(pattern: &str) -> Result<Self, ScanError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .unicode(false)
            .build()?;
        Ok(Self { regex })
    }

    pub fn matches(&self, content: &[u8]) -> bool {
        self.regex.is_match(content)
    }
}

/// 单次扫描使用的匹配器，整个扫描期间只构建一次，由所有 worker 共享只读引用
#[derive(Debug, Clone)]
pub enum TextMatcher {
    Literal(LiteralMatcher),
    Pattern(PatternMatcher),
}

impl TextMatcher {
    /// 按模式内容自动选择策略
    pub fn new(pattern: &str) -> Result<Self, ScanError> {
        match classify(pattern) {
            PatternKind::Literal => Ok(Self::literal(pattern)),
            PatternKind::Pattern => Self::regex(pattern),
        }
    }

    /// 强制字面量策略（元字符按普通字符处理）
    pub fn literal(pattern: &str) -> Self {
        Self::Literal(LiteralMatcher::new(pattern))
    }

    /// 强制正则策略；编译失败是扫描级致命错误
    pub fn regex(pattern: &str) -> Result<Self, ScanError> {
        Ok(Self::Pattern(PatternMatcher::new(pattern)?))
    }

    pub fn kind(&self) -> PatternKind {
        match self {
            Self::Literal(_) => PatternKind::Literal,
            Self::Pattern(_) => PatternKind::Pattern,
        }
    }

    pub fn matches(&self, content: &[u8]) -> bool {
        match self {
            Self::Literal(m) => m.matches(content),
            Self::Pattern(m) => m.matches(content),
        }
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
