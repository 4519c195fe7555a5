//! Domain layer - Pure computational logic
//!
//! This module contains the keyspace enumeration, digest matching and
//! partitioning algorithms without I/O dependencies.

pub mod alphabet;
pub mod digest;
pub mod enumerator;
pub mod error;
pub mod matcher;
pub mod shard;
