//! Keyspace partitioning
//!
//! Splits the leading-byte range of the alphabet into contiguous, disjoint
//! shards, one per worker.

use crate::domain::alphabet::Alphabet;
use crate::domain::error::KeyspaceError;
use std::ops::Range;

/// Inclusive candidate range `[begin, end]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Boundary {
    pub begin: Vec<u8>,
    pub end: Vec<u8>,
}

/// One worker's slice of the keyspace
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shard {
    /// Shard (= worker) index, 0..N
    pub index: usize,
    /// Leading byte values covered, half-open
    pub leading: Range<u16>,
    /// Candidate range, `None` when the shard received no leading byte
    pub boundary: Option<Boundary>,
}

impl Shard {
    pub fn is_empty(&self) -> bool {
        self.boundary.is_none()
    }

    /// Check if candidates starting with `byte` belong to this shard
    pub fn contains_leading(&self, byte: u8) -> bool {
        self.leading.contains(&u16::from(byte))
    }

    /// Human readable `start`/`stop` listing of the boundary
    pub fn describe(&self) -> String {
        match &self.boundary {
            Some(boundary) => format!(
                "start[{}] = '{}'\nstop[{}] = '{}'",
                self.index,
                String::from_utf8_lossy(&boundary.begin),
                self.index,
                String::from_utf8_lossy(&boundary.end)
            ),
            None => format!("shard[{}] is empty", self.index),
        }
    }
}

/// Partition the keyspace into `workers` shards along the leading byte
///
/// Shard `i` receives leading bytes
/// `[lower + R*i/N, lower + R*(i+1)/N - 1]` (floor division, `R` = radix).
/// The remaining positions span the whole alphabet. When `N > R` some
/// shards receive no leading byte and are returned empty.
pub fn partition(
    alphabet: Alphabet,
    length: usize,
    workers: usize,
) -> Result<Vec<Shard>, KeyspaceError> {
    if length == 0 {
        return Err(KeyspaceError::ZeroLength);
    }
    if workers == 0 {
        return Err(KeyspaceError::ZeroWorkers);
    }

    let radix = u64::from(alphabet.radix());
    let lower = u64::from(alphabet.lower());
    let n = workers as u64;

    let shards = (0..workers)
        .map(|index| {
            let i = index as u64;
            let first = lower + radix * i / n;
            let stop = lower + radix * (i + 1) / n;

            let boundary = (first < stop).then(|| {
                let mut begin = alphabet.min_candidate(length);
                let mut end = alphabet.max_candidate(length);
                // Both values are within [lower, upper] here
                begin[0] = first as u8;
                end[0] = (stop - 1) as u8;
                Boundary { begin, end }
            });

            Shard {
                index,
                leading: first as u16..stop as u16,
                boundary,
            }
        })
        .collect();

    Ok(shards)
}
