//! 模式分类：字面量 or 正则
//!
//! 分类只是性能优化：字面量走 memmem 子串搜索，其余编译为正则。
//! 对纯字面量输入，两条路径的匹配结果必须一致。

/// 搜索模式的匹配策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// 不含任何元字符，可直接做子串搜索
    Literal,
    /// 含元字符，需要正则引擎
    Pattern,
}

/// 视为正则元字符的字符集合
const META_CHARS: &[char] = &[
    '*', '+', '?', '.', '^', '$', '[', ']', '(', ')', '{', '}', '|', '\\',
];

/// 判定模式类型（纯函数，无失败）
pub fn classify(pattern: &str) -> PatternKind {
    if pattern.contains(META_CHARS) {
        PatternKind::Pattern
    } else {
        PatternKind::Literal
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
