//! MD5 digest value
//!
//! This module wraps the 128-bit digest the search compares against, including
//! parsing it from its hexadecimal representation.

use crate::constants::{DIGEST_HEX_LEN, DIGEST_SIZE};
use crate::domain::error::KeyspaceError;
use std::fmt;
use std::str::FromStr;

/// 128-bit MD5 digest
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    /// Digest of `data`
    pub fn of(data: &[u8]) -> Self {
        Self(md5::compute(data).0)
    }

    /// Digest of `candidate ++ suffix` without building the concatenation
    pub fn of_parts(candidate: &[u8], suffix: &[u8]) -> Self {
        let mut context = md5::Context::new();
        context.consume(candidate);
        context.consume(suffix);
        Self(context.compute().0)
    }

    /// Parse a digest from exactly 32 hex digits (either case)
    pub fn from_hex(text: &str) -> Result<Self, KeyspaceError> {
        if text.len() != DIGEST_HEX_LEN {
            return Err(KeyspaceError::DigestLengthMismatch {
                expected: DIGEST_HEX_LEN,
                found: text.len(),
            });
        }

        let mut bytes = [0u8; DIGEST_SIZE];
        hex::decode_to_slice(text, &mut bytes)?;
        Ok(Self(bytes))
    }

    /// Lowercase hex representation
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }
}

impl FromStr for Digest {
    type Err = KeyspaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.to_hex())
    }
}

/// Digest function applied to `candidate ++ suffix`
pub trait DigestFn: Clone + Send + Sync {
    fn digest(&self, candidate: &[u8], suffix: &[u8]) -> Digest;
}

/// MD5 over the concatenated candidate and suffix
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Md5;

impl DigestFn for Md5 {
    #[inline]
    fn digest(&self, candidate: &[u8], suffix: &[u8]) -> Digest {
        Digest::of_parts(candidate, suffix)
    }
}
