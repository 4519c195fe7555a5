//! Keyspace search related constants
//!
//! Note: these are the reference parameters. Every one of them can be
//! overridden through `SearchConfig`.

// =============================================================================
// Alphabet parameters
// =============================================================================

/// Lowest byte value of the default alphabet (' ')
pub const DEFAULT_LOWER: u8 = 32;

/// Highest byte value of the default alphabet (DEL)
pub const DEFAULT_UPPER: u8 = 127;

// =============================================================================
// Search parameters
// =============================================================================

/// Default candidate length
pub const DEFAULT_LENGTH: usize = 6;

/// Default number of parallel workers (= number of shards)
pub const DEFAULT_WORKERS: usize = 8;

/// Bytes appended to every candidate before digesting
pub const DEFAULT_SUFFIX: &[u8] = b"@http://facebook.com/";

// =============================================================================
// Digest
// =============================================================================

/// Byte size of a digest (MD5 = 128 bits)
pub const DIGEST_SIZE: usize = 16;

/// Number of hex digits in a textual digest
pub const DIGEST_HEX_LEN: usize = DIGEST_SIZE * 2;
