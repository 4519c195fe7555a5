//! Digest matching over a candidate range
//!
//! This module provides the match-test loop: every candidate is suffixed,
//! digested and compared against the target digest.

use crate::domain::alphabet::Alphabet;
use crate::domain::digest::{Digest, DigestFn, Md5};
use crate::domain::enumerator::RangeEnumerator;
use crate::domain::error::KeyspaceError;

/// Searches a candidate range for preimages of a target digest
///
/// The matcher owns its enumerator and only exposes the operations a worker
/// needs: test the cursor, advance it, and read it back.
#[derive(Clone, Debug)]
pub struct DigestMatcher<'a, H: DigestFn = Md5> {
    enumerator: RangeEnumerator,
    hasher: H,
    target: Digest,
    suffix: &'a [u8],
    tested: u64,
}

impl<'a> DigestMatcher<'a, Md5> {
    /// Create a matcher over `[begin, end]`
    ///
    /// # Arguments
    /// * `target` - Digest to find a preimage for
    /// * `suffix` - Bytes appended to every candidate before digesting
    /// * `alphabet`, `length`, `begin`, `end` - See [`RangeEnumerator::new`]
    pub fn new(
        target: Digest,
        suffix: &'a [u8],
        alphabet: Alphabet,
        length: usize,
        begin: Option<&[u8]>,
        end: Option<&[u8]>,
    ) -> Result<Self, KeyspaceError> {
        let enumerator = RangeEnumerator::new(alphabet, length, begin, end)?;
        Ok(DigestMatcher::with_hasher(Md5, target, suffix, enumerator))
    }
}

impl<'a, H: DigestFn> DigestMatcher<'a, H> {
    /// Wrap an existing enumerator, digesting with `hasher`
    pub fn with_hasher(
        hasher: H,
        target: Digest,
        suffix: &'a [u8],
        enumerator: RangeEnumerator,
    ) -> Self {
        Self {
            enumerator,
            hasher,
            target,
            suffix,
            tested: 0,
        }
    }

    /// Candidate under the cursor, without the suffix
    pub fn current(&self) -> &[u8] {
        self.enumerator.current()
    }

    /// Digest of the current candidate followed by the suffix
    pub fn current_digest(&self) -> Digest {
        self.hasher.digest(self.enumerator.current(), self.suffix)
    }

    /// Move the cursor past the current candidate
    pub fn advance(&mut self) -> bool {
        self.enumerator.advance()
    }

    /// Scan forward until the cursor sits on a match
    ///
    /// Returns `true` with the cursor left on the matching candidate, or
    /// `false` once the range is exhausted. Call [`advance`](Self::advance)
    /// after a match to keep scanning.
    pub fn search_next(&mut self) -> bool {
        if self.enumerator.is_exhausted() {
            return false;
        }

        loop {
            self.tested += 1;
            if self.current_digest() == self.target {
                return true;
            }
            if !self.enumerator.advance() {
                return false;
            }
        }
    }

    /// Number of candidates digested by `search_next` so far
    pub fn tested(&self) -> u64 {
        self.tested
    }

    pub fn target(&self) -> Digest {
        self.target
    }
}
