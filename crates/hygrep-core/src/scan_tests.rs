#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::test_utils::{create_tree, relative_names};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tempfile::TempDir;

fn names(root: &Path, result: &ScanResult) -> Vec<String> {
    relative_names(root, result.paths())
}

#[test]
fn single_worker_and_many_workers_agree() {
    let tmp = TempDir::new().unwrap();
    let files: Vec<(String, String)> = (0..50)
        .map(|i| {
            let body = if i % 3 == 0 { "needle" } else { "hay" };
            (format!("d{}/f{:02}.txt", i % 4, i), body.to_string())
        })
        .collect();
    let refs: Vec<(&str, &str)> = files.iter().map(|(p, c)| (p.as_str(), c.as_str())).collect();
    create_tree(tmp.path(), &refs);
    let request = ScanRequest::new(tmp.path(), "needle", false);

    let serial = scan(&request, &ScanOptions { threads: Some(1), ..Default::default() }).unwrap();
    let parallel = scan(&request, &ScanOptions { threads: Some(8), ..Default::default() }).unwrap();

    assert_eq!(serial.len(), 17);
    assert_eq!(serial.matches, parallel.matches);
    assert_eq!(serial.stats, ScanStats { candidates: 50, matched: 17 });
}

#[test]
fn more_workers_than_files() {
    let tmp = TempDir::new().unwrap();
    create_tree(tmp.path(), &[("one.txt", "match me")]);
    let request = ScanRequest::new(tmp.path(), "match", false);

    let result = scan(&request, &ScanOptions { threads: Some(64), ..Default::default() }).unwrap();

    assert_eq!(names(tmp.path(), &result), vec!["one.txt"]);
    assert_eq!(result.matches[0].text(), "match me");
}

#[test]
fn empty_tree_is_not_an_error() {
    let tmp = TempDir::new().unwrap();
    let result = scan(&ScanRequest::new(tmp.path(), "x", false), &ScanOptions::default()).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.stats, ScanStats::default());
}

#[test]
fn bad_pattern_fails_before_walking() {
    let tmp = TempDir::new().unwrap();
    // 根路径同样非法，但模式错误先被报告
    let request = ScanRequest::new(tmp.path().join("missing"), "a(", false);

    let err = scan(&request, &ScanOptions::default()).unwrap_err();

    assert!(matches!(err, ScanError::Pattern(_)));
}

#[test]
fn invalid_root_is_reported() {
    let tmp = TempDir::new().unwrap();
    let request = ScanRequest::new(tmp.path().join("missing"), "a", false);

    let err = scan(&request, &ScanOptions::default()).unwrap_err();

    assert!(matches!(err, ScanError::InvalidRoot { .. }));
}

#[test]
fn forced_literal_treats_dot_verbatim() {
    let tmp = TempDir::new().unwrap();
    create_tree(tmp.path(), &[("a.txt", "version 1.2"), ("b.txt", "version 1x2")]);
    let request = ScanRequest::new(tmp.path(), "1.2", false);

    let literal = scan_with(&request, &TextMatcher::literal("1.2"), &ScanOptions::default()).unwrap();
    let regex = scan(&request, &ScanOptions::default()).unwrap();

    assert_eq!(names(tmp.path(), &literal), vec!["a.txt"]);
    assert_eq!(names(tmp.path(), &regex), vec!["a.txt", "b.txt"]);
}

#[test]
fn preset_cancel_flag_yields_no_matches() {
    let tmp = TempDir::new().unwrap();
    create_tree(tmp.path(), &[("a.txt", "x"), ("b.txt", "x")]);
    let opts = ScanOptions { cancel: Some(Arc::new(AtomicBool::new(true))), ..Default::default() };

    let result = scan(&ScanRequest::new(tmp.path(), "x", false), &opts).unwrap();

    assert!(result.is_empty());
    assert_eq!(result.stats.candidates, 2);
}

#[test]
fn type_and_exclude_filters_apply() {
    let tmp = TempDir::new().unwrap();
    create_tree(
        tmp.path(),
        &[("main.py", "def main(): pass"), ("test_main.py", "def test_main(): pass"), ("main.js", "main()")],
    );
    let opts = ScanOptions {
        types: vec!["py".to_string()],
        exclude: vec!["test_*".to_string()],
        ..Default::default()
    };

    let result = scan(&ScanRequest::new(tmp.path(), "main", false), &opts).unwrap();

    assert_eq!(names(tmp.path(), &result), vec!["main.py"]);
}
