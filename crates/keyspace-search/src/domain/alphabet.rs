//! Contiguous byte alphabet
//!
//! Candidates are big-endian mixed-radix numbers whose digits are bytes in
//! `[lower, upper]`. Because every digit shares the same range, plain
//! lexicographic byte comparison of two equal-length candidates matches their
//! numeric order.

use crate::constants::{DEFAULT_LOWER, DEFAULT_UPPER};
use crate::domain::error::KeyspaceError;

/// Inclusive byte range every candidate position is drawn from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alphabet {
    lower: u8,
    upper: u8,
}

impl Alphabet {
    /// Create an alphabet covering `[lower, upper]`
    pub fn new(lower: u8, upper: u8) -> Result<Self, KeyspaceError> {
        if lower > upper {
            return Err(KeyspaceError::InvalidAlphabet { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> u8 {
        self.lower
    }

    pub fn upper(&self) -> u8 {
        self.upper
    }

    /// Number of distinct values per position (1..=256)
    pub fn radix(&self) -> u16 {
        u16::from(self.upper) - u16::from(self.lower) + 1
    }

    pub fn contains(&self, byte: u8) -> bool {
        (self.lower..=self.upper).contains(&byte)
    }

    /// Smallest candidate of the given length (all positions at `lower`)
    pub fn min_candidate(&self, length: usize) -> Vec<u8> {
        vec![self.lower; length]
    }

    /// Largest candidate of the given length (all positions at `upper`)
    pub fn max_candidate(&self, length: usize) -> Vec<u8> {
        vec![self.upper; length]
    }

    /// Number of candidates of the given length, `None` on overflow
    pub fn keyspace_size(&self, length: usize) -> Option<u128> {
        let exp = u32::try_from(length).ok()?;
        u128::from(self.radix()).checked_pow(exp)
    }

    /// Check that `candidate` has `length` bytes, all inside the alphabet
    pub fn check_candidate(&self, candidate: &[u8], length: usize) -> Result<(), KeyspaceError> {
        if candidate.len() != length {
            return Err(KeyspaceError::BoundaryLengthMismatch {
                expected: length,
                found: candidate.len(),
            });
        }

        if let Some((position, &byte)) = candidate
            .iter()
            .enumerate()
            .find(|(_, b)| !self.contains(**b))
        {
            return Err(KeyspaceError::ByteOutsideAlphabet {
                byte,
                position,
                lower: self.lower,
                upper: self.upper,
            });
        }

        Ok(())
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            lower: DEFAULT_LOWER,
            upper: DEFAULT_UPPER,
        }
    }
}
