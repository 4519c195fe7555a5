//! Parallel search workflow
//!
//! This module partitions the keyspace, runs one worker per shard on a
//! dedicated thread pool and streams every match to a shared sink.

use crate::constants::{DEFAULT_SUFFIX, DEFAULT_WORKERS};
use crate::domain::alphabet::Alphabet;
use crate::domain::digest::{Digest, DigestFn, Md5};
use crate::domain::error::KeyspaceError;
use crate::domain::enumerator::RangeEnumerator;
use crate::domain::matcher::DigestMatcher;
use crate::domain::shard::{Shard, partition};
use crate::infra::sink::MatchSink;
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use std::io::{self, Write};
use std::ops::Range;
use thiserror::Error;

/// Search parameters, fixed for the whole run
#[derive(Clone, Debug, PartialEq)]
pub struct SearchConfig {
    /// Digest to find preimages for
    pub target: Digest,
    /// Candidate length
    pub length: usize,
    /// Number of workers (= number of shards)
    pub workers: usize,
    /// Byte range of every candidate position
    pub alphabet: Alphabet,
    /// Bytes appended to every candidate before digesting
    pub suffix: Vec<u8>,
}

impl SearchConfig {
    /// Create a config with the reference alphabet, suffix and worker count
    pub fn new(target: Digest, length: usize) -> Self {
        Self {
            target,
            length,
            workers: DEFAULT_WORKERS,
            alphabet: Alphabet::default(),
            suffix: DEFAULT_SUFFIX.to_vec(),
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<Vec<u8>>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Check every precondition before any work starts
    pub fn validate(&self) -> Result<(), KeyspaceError> {
        if self.length == 0 {
            return Err(KeyspaceError::ZeroLength);
        }
        if self.workers == 0 {
            return Err(KeyspaceError::ZeroWorkers);
        }
        Ok(())
    }

    /// Shards this config splits the keyspace into
    pub fn shards(&self) -> Result<Vec<Shard>, KeyspaceError> {
        partition(self.alphabet, self.length, self.workers)
    }

    /// Total number of candidates, `None` on overflow
    pub fn keyspace_size(&self) -> Option<u128> {
        self.alphabet.keyspace_size(self.length)
    }
}

/// Search errors
#[derive(Debug, Error)]
pub enum SearchError {
    /// Invalid search parameters
    #[error(transparent)]
    Keyspace(#[from] KeyspaceError),
    /// Worker threads could not be started
    #[error("failed to launch worker threads: {0}")]
    WorkerLaunch(#[from] rayon::ThreadPoolBuildError),
    /// A match could not be written to the sink
    #[error("failed to write match: {0}")]
    Output(#[from] io::Error),
}

/// Outcome of scanning one shard
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShardReport {
    /// Shard index
    pub index: usize,
    /// Leading byte values covered, half-open
    pub leading: Range<u16>,
    /// Candidates digested
    pub tested: u64,
    /// Matches emitted
    pub matches: u64,
}

/// Outcome of a full search, one report per shard in index order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchSummary {
    pub shards: Vec<ShardReport>,
}

impl SearchSummary {
    pub fn total_tested(&self) -> u64 {
        self.shards.iter().map(|s| s.tested).sum()
    }

    pub fn total_matches(&self) -> u64 {
        self.shards.iter().map(|s| s.matches).sum()
    }
}

/// Search the whole keyspace, writing every match to `sink`
///
/// Blocks until every worker has exhausted its shard.
pub fn search<W>(config: &SearchConfig, sink: &MatchSink<W>) -> Result<SearchSummary, SearchError>
where
    W: Write + Send,
{
    search_with_progress(config, sink, |_| {})
}

/// Search with a callback invoked as each shard finishes
///
/// # Arguments
/// * `config` - Search parameters
/// * `sink` - Shared output for match lines
/// * `on_progress` - Called from the worker thread with the finished shard's report
///
/// # Returns
/// Per-shard reports, or the first error raised by a worker
pub fn search_with_progress<W, F>(
    config: &SearchConfig,
    sink: &MatchSink<W>,
    on_progress: F,
) -> Result<SearchSummary, SearchError>
where
    W: Write + Send,
    F: Fn(&ShardReport) + Sync,
{
    search_with_hasher(config, Md5, sink, on_progress)
}

/// Search using a caller-supplied digest function
///
/// Each worker receives its own clone of `hasher`.
pub fn search_with_hasher<H, W, F>(
    config: &SearchConfig,
    hasher: H,
    sink: &MatchSink<W>,
    on_progress: F,
) -> Result<SearchSummary, SearchError>
where
    H: DigestFn,
    W: Write + Send,
    F: Fn(&ShardReport) + Sync,
{
    config.validate()?;
    let shards = config.shards()?;

    let pool = ThreadPoolBuilder::new()
        .num_threads(shards.len())
        .thread_name(|i| format!("shard-worker-{}", i))
        .build()?;

    // One task per shard; the pool has exactly one thread per task
    let reports = pool.install(|| {
        shards
            .par_iter()
            .with_max_len(1)
            .map(|shard| {
                let report = scan_shard(config, hasher.clone(), shard, sink)?;
                on_progress(&report);
                Ok(report)
            })
            .collect::<Result<Vec<_>, SearchError>>()
    })?;

    Ok(SearchSummary { shards: reports })
}

/// Scan a single shard to exhaustion
///
/// Every match is emitted; the worker keeps scanning after a match.
fn scan_shard<H: DigestFn, W: Write>(
    config: &SearchConfig,
    hasher: H,
    shard: &Shard,
    sink: &MatchSink<W>,
) -> Result<ShardReport, SearchError> {
    let mut report = ShardReport {
        index: shard.index,
        leading: shard.leading.clone(),
        tested: 0,
        matches: 0,
    };

    let Some(boundary) = &shard.boundary else {
        return Ok(report);
    };

    let enumerator = RangeEnumerator::new(
        config.alphabet,
        config.length,
        Some(boundary.begin.as_slice()),
        Some(boundary.end.as_slice()),
    )?;
    let mut matcher =
        DigestMatcher::with_hasher(hasher, config.target, &config.suffix, enumerator);

    while matcher.search_next() {
        sink.emit(shard.index, matcher.current())?;
        report.matches += 1;
        if !matcher.advance() {
            break;
        }
    }

    report.tested = matcher.tested();
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_config(target: &[u8]) -> SearchConfig {
        SearchConfig::new(Digest::of(target), 2)
            .with_alphabet(Alphabet::new(b'a', b'c').unwrap())
            .with_suffix(b"@x".as_slice())
            .with_workers(3)
    }

    fn run(config: &SearchConfig) -> (SearchSummary, String) {
        let sink = MatchSink::new(Vec::new());
        let summary = search(config, &sink).unwrap();
        let output = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        (summary, output)
    }

    #[test]
    fn test_config_defaults() {
        let config = SearchConfig::new(Digest::of(b""), 6);
        assert_eq!(config.workers, 8);
        assert_eq!(config.alphabet, Alphabet::default());
        assert_eq!(config.suffix, b"@http://facebook.com/");
        assert_eq!(config.keyspace_size(), Some(96u128.pow(6)));
    }

    #[test]
    fn test_validate_rejects_zero() {
        let config = SearchConfig::new(Digest::of(b""), 0);
        assert_eq!(config.validate(), Err(KeyspaceError::ZeroLength));

        let config = SearchConfig::new(Digest::of(b""), 2).with_workers(0);
        assert_eq!(config.validate(), Err(KeyspaceError::ZeroWorkers));

        let sink = MatchSink::new(Vec::new());
        let result = search(&config, &sink);
        assert!(matches!(
            result,
            Err(SearchError::Keyspace(KeyspaceError::ZeroWorkers))
        ));
    }

    #[test]
    fn test_search_reference_scenario() {
        let (summary, output) = run(&abc_config(b"ab@x"));
        assert_eq!(output, "0 ab\n");
        assert_eq!(summary.total_matches(), 1);
        assert_eq!(summary.total_tested(), 9);
        assert_eq!(summary.shards.len(), 3);
        assert_eq!(summary.shards[0].matches, 1);
    }

    #[test]
    fn test_search_no_match() {
        let (summary, output) = run(&abc_config(b"not a candidate"));
        assert!(output.is_empty());
        assert_eq!(summary.total_matches(), 0);
        assert_eq!(summary.total_tested(), 9);
    }

    #[test]
    fn test_search_match_in_last_shard() {
        let (_, output) = run(&abc_config(b"cc@x"));
        assert_eq!(output, "2 cc\n");
    }

    #[test]
    fn test_search_more_workers_than_leading_bytes() {
        let config = abc_config(b"ba@x").with_workers(5);
        let (summary, output) = run(&config);
        assert_eq!(output, "3 ba\n");
        assert_eq!(summary.shards.len(), 5);
        assert_eq!(summary.shards[0].tested, 0);
        assert_eq!(summary.shards[2].tested, 0);
        assert_eq!(summary.total_tested(), 9);
    }

    #[test]
    fn test_search_single_worker() {
        let config = abc_config(b"bc@x").with_workers(1);
        let (summary, output) = run(&config);
        assert_eq!(output, "0 bc\n");
        assert_eq!(summary.shards[0].leading, u16::from(b'a')..u16::from(b'd'));
    }

    #[test]
    fn test_search_empty_suffix() {
        let config = abc_config(b"ca").with_suffix(Vec::new());
        let (_, output) = run(&config);
        assert_eq!(output, "2 ca\n");
    }

    #[test]
    fn test_progress_called_once_per_shard() {
        use std::sync::Mutex;

        let config = abc_config(b"ab@x").with_workers(4);
        let seen = Mutex::new(Vec::new());
        let sink = MatchSink::new(Vec::new());

        let summary = search_with_progress(&config, &sink, |report| {
            seen.lock().unwrap().push(report.index);
        })
        .unwrap();

        let mut seen = seen.into_inner().unwrap();
        seen.sort_unstable();
        assert_eq!(seen, [0, 1, 2, 3]);
        let indices: Vec<_> = summary.shards.iter().map(|s| s.index).collect();
        assert_eq!(indices, [0, 1, 2, 3]);
    }

    /// Digest of the trailing byte only, so candidates collide freely
    #[derive(Clone)]
    struct LastByte;

    impl DigestFn for LastByte {
        fn digest(&self, candidate: &[u8], _suffix: &[u8]) -> Digest {
            Digest::of(&candidate[candidate.len() - 1..])
        }
    }

    #[test]
    fn test_multiple_matches_per_shard_in_order() {
        let config = abc_config(b"").with_alphabet(Alphabet::new(b'a', b'd').unwrap());
        let config = SearchConfig {
            target: Digest::of(b"b"),
            ..config
        }
        .with_workers(2);

        let sink = MatchSink::new(Vec::new());
        let summary = search_with_hasher(&config, LastByte, &sink, |_| {}).unwrap();
        let output = String::from_utf8(sink.into_inner().unwrap()).unwrap();

        // Lines from different shards may arrive in any order
        let shard0: Vec<_> = output.lines().filter(|l| l.starts_with("0 ")).collect();
        let shard1: Vec<_> = output.lines().filter(|l| l.starts_with("1 ")).collect();
        assert_eq!(shard0, ["0 ab", "0 bb"]);
        assert_eq!(shard1, ["1 cb", "1 db"]);
        assert_eq!(summary.total_matches(), 4);
        assert_eq!(summary.total_tested(), 16);
    }

    #[test]
    fn test_output_error_propagated() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("disk full"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let config = abc_config(b"ab@x");
        let sink = MatchSink::new(FailingWriter);
        let result = search(&config, &sink);
        assert!(matches!(result, Err(SearchError::Output(_))));
    }
}
