use anyhow::{Context, Result};
use clap::Parser;
use hygrep_core::{load_config, scan_with, OutputItem, ScanOptions, ScanRequest, ScanResult, TextMatcher};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;

/// grep 兼容的退出码
const EXIT_MATCH: u8 = 0;
const EXIT_NO_MATCH: u8 = 1;
const EXIT_ERROR: u8 = 2;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "hygrep", version, about = "代码搜索：召回阶段文件扫描")]
struct Cli {
    /// 搜索模式（不含元字符时按字面量匹配）
    pattern: String,

    /// 搜索目录或单个文件
    #[arg(default_value = ".")]
    path: PathBuf,

    /// 强制字面量匹配
    #[arg(short = 'e', long, conflicts_with = "regex")]
    exact: bool,

    /// 强制正则匹配
    #[arg(short = 'r', long)]
    regex: bool,

    /// 包含隐藏文件与目录
    #[arg(long, overrides_with = "no_hidden")]
    hidden: bool,

    /// 排除隐藏文件与目录（覆盖配置文件中的 include_hidden）
    #[arg(long, overrides_with = "hidden")]
    no_hidden: bool,

    /// 最大扫描文件大小（字节）
    #[arg(long)]
    max_file_size: Option<u64>,

    /// 线程数（"auto"=CPU 核心数）
    #[arg(long, default_value = "auto")]
    threads: String,

    /// 排除 glob（可重复）
    #[arg(long, value_name = "GLOB")]
    exclude: Vec<String>,

    /// 只搜索指定扩展名（可重复）
    #[arg(short = 't', long = "type", value_name = "EXT")]
    types: Vec<String>,

    /// 配置文件路径（TOML）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 最多输出的结果数
    #[arg(short = 'n', long)]
    max_results: Option<usize>,

    /// 以 JSON 数组输出
    #[arg(short = 'j', long)]
    json: bool,
}

fn main() -> ExitCode {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => ExitCode::from(EXIT_MATCH),
        Ok(false) => ExitCode::from(EXIT_NO_MATCH),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// 执行一次搜索；返回是否有命中
fn run(cli: Cli) -> Result<bool> {
    let mut opts = ScanOptions::default();
    let mut hidden_from_config = None;
    if let Some(path) = &cli.config {
        let cfg = load_config(path)?;
        hidden_from_config = cfg.include_hidden;
        cfg.apply(&mut opts);
    }
    let include_hidden = resolve_hidden(cli.hidden, cli.no_hidden, hidden_from_config);
    // 命令行参数优先于配置文件
    if let Some(max) = cli.max_file_size {
        opts.max_file_size = max;
    }
    if let Some(threads) = parse_threads(&cli.threads) {
        opts.threads = Some(threads);
    }
    opts.exclude.extend(cli.exclude);
    opts.types.extend(cli.types);

    let matcher = if cli.exact {
        TextMatcher::literal(&cli.pattern)
    } else if cli.regex {
        TextMatcher::regex(&cli.pattern)?
    } else {
        TextMatcher::new(&cli.pattern)?
    };

    info!(path = ?cli.path, pattern = %cli.pattern, kind = ?matcher.kind(), "starting scan");
    let request = ScanRequest::new(&cli.path, cli.pattern, include_hidden);
    let result = scan_with(&request, &matcher, &opts).context("scan failed")?;
    info!(candidates = result.stats.candidates, matched = result.stats.matched, "scan finished");

    let found = !result.is_empty();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_results(&mut out, &result, &cli.path, cli.max_results, cli.json)?;
    out.flush().context("flush output")?;
    Ok(found)
}

/// 输出结果：默认每行一个路径（尽量相对于搜索根），`--json` 时输出 JSON 数组
fn write_results(
    out: &mut dyn Write,
    result: &ScanResult,
    root: &Path,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
    let limit = limit.unwrap_or(usize::MAX);
    let shown: Vec<(String, usize)> = result
        .matches
        .iter()
        .take(limit)
        .map(|m| (display_path(&m.path, &root), m.content.len()))
        .collect();

    if json {
        let items: Vec<OutputItem> =
            shown.iter().map(|(file, size)| OutputItem { file, size: *size }).collect();
        serde_json::to_writer_pretty(&mut *out, &items)?;
        writeln!(out)?;
    } else {
        for (file, _) in &shown {
            writeln!(out, "{file}")?;
        }
    }
    Ok(())
}

fn display_path(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.display().to_string(),
        _ => path.display().to_string(),
    }
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 日志写到 stderr，避免与结果混在一起；默认只输出警告
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 隐藏文件策略：命令行显式开关优先，其次配置文件，默认不包含
fn resolve_hidden(hidden: bool, no_hidden: bool, from_config: Option<bool>) -> bool {
    if hidden {
        true
    } else if no_hidden {
        false
    } else {
        from_config.unwrap_or(false)
    }
}

/// 解析线程参数
fn parse_threads(s: &str) -> Option<usize> {
    if s.eq_ignore_ascii_case("auto") { return None; }
    match s.parse::<usize>() {
        Ok(n) if n >= 1 => Some(n),
        _ => None,
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
