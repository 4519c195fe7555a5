//! keyspace-search - Parallel exhaustive preimage search
//!
//! This crate provides functionality to:
//! - Enumerate every fixed-length candidate between two boundaries (odometer order)
//! - Test candidates (plus a domain suffix) against a target MD5 digest
//! - Partition the keyspace into shards and scan them on parallel workers

pub mod app;
pub mod constants;
pub mod domain;
pub mod infra;

// Re-export commonly used types
pub use app::coordinator::{
    SearchConfig, SearchError, SearchSummary, ShardReport, search, search_with_hasher,
    search_with_progress,
};
pub use constants::*;
pub use domain::alphabet::Alphabet;
pub use domain::digest::{Digest, DigestFn, Md5};
pub use domain::enumerator::RangeEnumerator;
pub use domain::error::KeyspaceError;
pub use domain::matcher::DigestMatcher;
pub use domain::shard::{Boundary, Shard, partition};
pub use infra::sink::MatchSink;
