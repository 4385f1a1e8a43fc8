//! 扫描主流程与并行调度
//!
//! 并发收集结果不使用锁：结果槽位（命中标记 + 内容缓冲）按连续区间切分，
//! 每个 worker 独占自己的区间；线程池 `install` 返回即为汇合点，
//! 之后单线程按下标顺序收集，输出顺序与遍历顺序一致。
use std::sync::atomic::Ordering;

use rayon::prelude::*;
use tracing::debug;

use crate::engine::probe;
use crate::error::ScanError;
use crate::filter::FileFilter;
use crate::matcher::TextMatcher;
use crate::options::{ScanOptions, ScanStats};
use crate::types::{CandidateFile, ScanMatch, ScanRequest, ScanResult};
use crate::walker::TreeWalker;

/// 扫描 `request.root()` 下内容匹配 `request.pattern()` 的文件
///
/// 致命错误（模式编译失败、排除 glob 非法、根路径非法）在读取任何文件之前返回。
pub fn scan(request: &ScanRequest, opts: &ScanOptions) -> Result<ScanResult, ScanError> {
    let matcher = TextMatcher::new(request.pattern())?;
    scan_with(request, &matcher, opts)
}

/// 与 `scan` 相同，但使用调用方预先构建的匹配器（例如强制字面量模式）
pub fn scan_with(
    request: &ScanRequest,
    matcher: &TextMatcher,
    opts: &ScanOptions,
) -> Result<ScanResult, ScanError> {
    let filter = FileFilter::from_options(opts)?;
    let candidates = TreeWalker::new(&filter, request.include_hidden()).enumerate(request.root())?;
    scan_candidates(&candidates, matcher, opts)
}

/// 对已枚举的候选文件并行执行匹配
pub fn scan_candidates(
    candidates: &[CandidateFile],
    matcher: &TextMatcher,
    opts: &ScanOptions,
) -> Result<ScanResult, ScanError> {
    let total = candidates.len();
    if total == 0 {
        return Ok(ScanResult::default());
    }

    let workers = opts.worker_count().min(total);
    // 每个 worker 一个连续区间
    let chunk = total.div_ceil(workers);
    let max_size = opts.max_file_size;
    let cancel = opts.cancel.as_deref();

    let mut mask = vec![false; total];
    let mut contents: Vec<Vec<u8>> = vec![Vec::new(); total];

    let pool = rayon::ThreadPoolBuilder::new().num_threads(workers).build()?;
    pool.install(|| {
        candidates
            .par_chunks(chunk)
            .zip(mask.par_chunks_mut(chunk))
            .zip(contents.par_chunks_mut(chunk))
            .for_each(|((files, hits), bufs)| {
                for ((file, hit), buf) in files.iter().zip(hits.iter_mut()).zip(bufs.iter_mut()) {
                    if cancel.is_some_and(|c| c.load(Ordering::Relaxed)) {
                        return;
                    }
                    if let Some(content) = probe(file, matcher, max_size) {
                        *hit = true;
                        *buf = content;
                    }
                }
            });
    });

    // 所有 worker 已结束，按下标顺序收集
    let matches: Vec<ScanMatch> = candidates
        .iter()
        .zip(mask)
        .zip(contents)
        .filter_map(|((file, hit), content)| {
            hit.then(|| ScanMatch { path: file.path.clone(), content })
        })
        .collect();

    let stats = ScanStats { candidates: total, matched: matches.len() };
    debug!(candidates = stats.candidates, matched = stats.matched, workers, "scan finished");
    Ok(ScanResult { matches, stats })
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
