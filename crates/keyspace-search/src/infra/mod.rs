//! Infrastructure layer - I/O and external dependencies
//!
//! This module handles writing match results to shared output streams.

pub mod sink;
