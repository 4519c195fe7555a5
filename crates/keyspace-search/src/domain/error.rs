//! Precondition errors shared by the domain types

use thiserror::Error;

/// Errors raised while setting up a search, before any candidate is tested
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KeyspaceError {
    /// Candidate length must be positive
    #[error("candidate length must be greater than zero")]
    ZeroLength,
    /// A boundary does not have the configured candidate length
    #[error("boundary length mismatch: expected {expected}, found {found}")]
    BoundaryLengthMismatch { expected: usize, found: usize },
    /// A boundary contains a byte the alphabet cannot produce
    #[error("byte 0x{byte:02X} at position {position} is outside the alphabet [{lower}, {upper}]")]
    ByteOutsideAlphabet {
        byte: u8,
        position: usize,
        lower: u8,
        upper: u8,
    },
    /// Alphabet bounds are inverted
    #[error("invalid alphabet: lower bound {lower} is greater than upper bound {upper}")]
    InvalidAlphabet { lower: u8, upper: u8 },
    /// At least one worker is required
    #[error("worker count must be greater than zero")]
    ZeroWorkers,
    /// Hex digest has the wrong number of digits
    #[error("invalid digest length: expected {expected} hex digits, found {found}")]
    DigestLengthMismatch { expected: usize, found: usize },
    /// Hex digest contains a non-hex character
    #[error("invalid digest: {0}")]
    InvalidDigestHex(#[from] hex::FromHexError),
}
