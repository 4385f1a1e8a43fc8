#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;

fn default_filter() -> FileFilter {
    FileFilter::from_options(&ScanOptions::default()).unwrap()
}

#[test]
fn prunes_default_dirs() {
    let f = default_filter();
    for name in ["node_modules", "target", "build", "dist", "venv", "env", ".git", ".idea"] {
        assert!(f.is_ignored_dir(name), "{name} should be ignored");
    }
    assert!(!f.is_ignored_dir("src"));
    // 按名称精确匹配，不做子串匹配
    assert!(!f.is_ignored_dir("builds"));
}

#[test]
fn rejects_binary_extensions_case_insensitively() {
    let f = default_filter();
    assert!(!f.accepts_file("photo.PNG", Path::new("photo.PNG")));
    assert!(!f.accepts_file("model.onnx", Path::new("models/model.onnx")));
    assert!(!f.accepts_file("Cargo.lock", Path::new("Cargo.lock")));
    assert!(f.accepts_file("main.rs", Path::new("src/main.rs")));
    assert!(f.accepts_file("Makefile", Path::new("Makefile")));
}

#[test]
fn rejects_lock_files_by_name() {
    let f = default_filter();
    assert!(!f.accepts_file("package-lock.json", Path::new("package-lock.json")));
    assert!(f.accepts_file("package.json", Path::new("package.json")));
}

#[test]
fn exclude_globs_match_name_or_relative_path() {
    let opts = ScanOptions {
        exclude: vec!["test_*".to_string(), "gen/**".to_string()],
        ..Default::default()
    };
    let f = FileFilter::from_options(&opts).unwrap();
    assert!(!f.accepts_file("test_main.py", Path::new("pkg/test_main.py")));
    assert!(!f.accepts_file("api.rs", Path::new("gen/proto/api.rs")));
    assert!(f.accepts_file("main.py", Path::new("pkg/main.py")));
}

#[test]
fn invalid_exclude_glob_is_an_error() {
    let opts = ScanOptions { exclude: vec!["a[".to_string()], ..Default::default() };
    let err = FileFilter::from_options(&opts).unwrap_err();
    assert!(matches!(err, ScanError::Exclude(_)));
}

#[test]
fn type_filter_keeps_only_listed_extensions() {
    let opts = ScanOptions { types: vec!["py".to_string(), ".RS".to_string()], ..Default::default() };
    let f = FileFilter::from_options(&opts).unwrap();
    assert!(f.accepts_file("code.py", Path::new("code.py")));
    assert!(f.accepts_file("lib.rs", Path::new("lib.rs")));
    assert!(!f.accepts_file("code.js", Path::new("code.js")));
    assert!(!f.accepts_file("README", Path::new("README")));
}

#[test]
fn extra_deny_list_entries_extend_defaults() {
    let mut opts = ScanOptions::default();
    opts.ignored_dirs.push("fixtures".to_string());
    opts.binary_extensions.push("snap".to_string());
    let f = FileFilter::from_options(&opts).unwrap();
    assert!(f.is_ignored_dir("fixtures"));
    assert!(f.is_ignored_dir("node_modules"));
    assert!(!f.accepts_file("a.snap", Path::new("a.snap")));
}

#[test]
fn extra_file_names_extend_lock_file_list() {
    let mut opts = ScanOptions::default();
    opts.ignored_file_names.push("yarn-error.log".to_string());
    let f = FileFilter::from_options(&opts).unwrap();
    assert!(!f.accepts_file("yarn-error.log", Path::new("yarn-error.log")));
    assert!(!f.accepts_file("package-lock.json", Path::new("package-lock.json")));
    assert!(f.accepts_file("error.log", Path::new("error.log")));
}

#[test]
fn cleared_file_name_list_accepts_lock_files() {
    let opts = ScanOptions { ignored_file_names: Vec::new(), ..Default::default() };
    let f = FileFilter::from_options(&opts).unwrap();
    assert!(f.accepts_file("package-lock.json", Path::new("package-lock.json")));
}
