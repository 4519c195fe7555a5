//! Range enumeration over a fixed-length keyspace
//!
//! This module provides an odometer-style cursor that walks every candidate
//! between two inclusive boundaries in lexicographic order.

use crate::domain::alphabet::Alphabet;
use crate::domain::error::KeyspaceError;

/// Cursor over the inclusive candidate range `[begin, end]`
///
/// The cursor starts at `begin`. Each call to [`advance`](Self::advance)
/// moves it to the lexicographic successor until `end` is reached.
/// A range with `begin > end` is empty and starts out exhausted.
#[derive(Clone, Debug)]
pub struct RangeEnumerator {
    alphabet: Alphabet,
    current: Vec<u8>,
    end: Vec<u8>,
    exhausted: bool,
}

impl RangeEnumerator {
    /// Create an enumerator over `[begin, end]`
    ///
    /// # Arguments
    /// * `alphabet` - Byte range of every position
    /// * `length` - Candidate length (must be positive)
    /// * `begin` - First candidate (default: all `lower`)
    /// * `end` - Last candidate (default: all `upper`)
    pub fn new(
        alphabet: Alphabet,
        length: usize,
        begin: Option<&[u8]>,
        end: Option<&[u8]>,
    ) -> Result<Self, KeyspaceError> {
        if length == 0 {
            return Err(KeyspaceError::ZeroLength);
        }

        let current = match begin {
            Some(begin) => {
                alphabet.check_candidate(begin, length)?;
                begin.to_vec()
            }
            None => alphabet.min_candidate(length),
        };

        let end = match end {
            Some(end) => {
                alphabet.check_candidate(end, length)?;
                end.to_vec()
            }
            None => alphabet.max_candidate(length),
        };

        let exhausted = current > end;

        Ok(Self {
            alphabet,
            current,
            end,
            exhausted,
        })
    }

    /// Create an enumerator over the whole keyspace of the given length
    pub fn full(alphabet: Alphabet, length: usize) -> Result<Self, KeyspaceError> {
        Self::new(alphabet, length, None, None)
    }

    /// Candidate currently under the cursor
    pub fn current(&self) -> &[u8] {
        &self.current
    }

    /// Last candidate of the range
    pub fn end(&self) -> &[u8] {
        &self.end
    }

    pub fn length(&self) -> usize {
        self.current.len()
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// True once `advance` has reported the end, or when the range is empty
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Move to the next candidate
    ///
    /// Returns `false` when the cursor is already at `end` (the cursor then
    /// stays on `end`) or the range is empty.
    pub fn advance(&mut self) -> bool {
        if self.exhausted || self.current == self.end {
            self.exhausted = true;
            return false;
        }

        let (lower, upper) = (self.alphabet.lower(), self.alphabet.upper());

        // Rightmost position is the least significant digit
        for byte in self.current.iter_mut().rev() {
            if *byte == upper {
                *byte = lower;
            } else {
                *byte += 1;
                return true;
            }
        }

        // Every digit carried
        self.exhausted = true;
        false
    }
}

impl IntoIterator for RangeEnumerator {
    type Item = Vec<u8>;
    type IntoIter = Candidates;

    fn into_iter(self) -> Self::IntoIter {
        Candidates {
            enumerator: self,
            started: false,
        }
    }
}

/// Owning iterator over every candidate of a [`RangeEnumerator`]
///
/// Yields `begin` first and `end` last.
#[derive(Clone, Debug)]
pub struct Candidates {
    enumerator: RangeEnumerator,
    started: bool,
}

impl Iterator for Candidates {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            if self.enumerator.is_exhausted() {
                return None;
            }
        } else if !self.enumerator.advance() {
            return None;
        }
        Some(self.enumerator.current().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Alphabet {
        Alphabet::new(b'a', b'c').unwrap()
    }

    fn collect(enumerator: RangeEnumerator) -> Vec<String> {
        enumerator
            .into_iter()
            .map(|c| String::from_utf8(c).unwrap())
            .collect()
    }

    #[test]
    fn test_zero_length_rejected() {
        let result = RangeEnumerator::full(abc(), 0);
        assert!(matches!(result, Err(KeyspaceError::ZeroLength)));
    }

    #[test]
    fn test_boundary_length_mismatch_rejected() {
        let result = RangeEnumerator::new(abc(), 2, Some(b"abc"), None);
        assert!(matches!(
            result,
            Err(KeyspaceError::BoundaryLengthMismatch {
                expected: 2,
                found: 3
            })
        ));

        let result = RangeEnumerator::new(abc(), 2, None, Some(b"c"));
        assert!(matches!(
            result,
            Err(KeyspaceError::BoundaryLengthMismatch {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_boundary_outside_alphabet_rejected() {
        let result = RangeEnumerator::new(abc(), 2, Some(b"az"), None);
        assert!(matches!(
            result,
            Err(KeyspaceError::ByteOutsideAlphabet { byte: b'z', .. })
        ));
    }

    #[test]
    fn test_default_boundaries() {
        let enumerator = RangeEnumerator::full(abc(), 3).unwrap();
        assert_eq!(enumerator.current(), b"aaa");
        assert_eq!(enumerator.end(), b"ccc");
        assert!(!enumerator.is_exhausted());
    }

    #[test]
    fn test_full_enumeration_order() {
        let enumerator = RangeEnumerator::full(abc(), 2).unwrap();
        assert_eq!(
            collect(enumerator),
            ["aa", "ab", "ac", "ba", "bb", "bc", "ca", "cb", "cc"]
        );
    }

    #[test]
    fn test_advance_carries_into_leading_position() {
        let mut enumerator = RangeEnumerator::new(abc(), 3, Some(b"acc"), None).unwrap();
        assert!(enumerator.advance());
        assert_eq!(enumerator.current(), b"baa");
    }

    #[test]
    fn test_advance_stops_at_end() {
        let mut enumerator = RangeEnumerator::new(abc(), 2, Some(b"bb"), Some(b"ca")).unwrap();
        assert!(enumerator.advance());
        assert_eq!(enumerator.current(), b"bc");
        assert!(enumerator.advance());
        assert_eq!(enumerator.current(), b"ca");
        assert!(!enumerator.advance());
        assert_eq!(enumerator.current(), b"ca");
        assert!(enumerator.is_exhausted());
        assert!(!enumerator.advance());
    }

    #[test]
    fn test_single_candidate_range() {
        let mut enumerator = RangeEnumerator::new(abc(), 2, Some(b"bb"), Some(b"bb")).unwrap();
        assert_eq!(enumerator.current(), b"bb");
        assert!(!enumerator.advance());

        let enumerator = RangeEnumerator::new(abc(), 2, Some(b"bb"), Some(b"bb")).unwrap();
        assert_eq!(collect(enumerator), ["bb"]);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let mut enumerator = RangeEnumerator::new(abc(), 2, Some(b"cc"), Some(b"aa")).unwrap();
        assert!(enumerator.is_exhausted());
        assert!(!enumerator.advance());
        assert_eq!(enumerator.current(), b"cc");

        let enumerator = RangeEnumerator::new(abc(), 2, Some(b"cc"), Some(b"aa")).unwrap();
        assert!(collect(enumerator).is_empty());
    }

    #[test]
    fn test_full_byte_alphabet_wraps() {
        let alphabet = Alphabet::new(0, 255).unwrap();
        let mut enumerator =
            RangeEnumerator::new(alphabet, 2, Some(&[0x00u8, 0xFF][..]), None).unwrap();
        assert!(enumerator.advance());
        assert_eq!(enumerator.current(), &[0x01u8, 0x00]);
    }

    #[test]
    fn test_enumeration_count_matches_keyspace() {
        let alphabet = Alphabet::new(b'0', b'4').unwrap();
        let enumerator = RangeEnumerator::full(alphabet, 4).unwrap();
        let count = enumerator.into_iter().count() as u128;
        assert_eq!(Some(count), alphabet.keyspace_size(4));
    }

    #[test]
    fn test_enumeration_strictly_increasing() {
        let alphabet = Alphabet::new(b'x', b'z').unwrap();
        let candidates: Vec<_> = RangeEnumerator::new(alphabet, 3, Some(b"xzy"), Some(b"zxy"))
            .unwrap()
            .into_iter()
            .collect();

        assert_eq!(candidates.first().map(Vec::as_slice), Some(&b"xzy"[..]));
        assert_eq!(candidates.last().map(Vec::as_slice), Some(&b"zxy"[..]));
        assert!(candidates.windows(2).all(|w| w[0] < w[1]));
    }
}
