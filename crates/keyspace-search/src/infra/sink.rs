//! Synchronized match output
//!
//! Workers report matches concurrently; every line is assembled first and
//! written under a single lock so lines from different workers never
//! interleave.

use std::fs::File;
use std::io::{self, BufWriter, Stdout, Write};
use std::path::Path;
use std::sync::Mutex;

/// Shared writer for `"<shard> <candidate>\n"` lines
#[derive(Debug)]
pub struct MatchSink<W: Write> {
    writer: Mutex<W>,
}

impl<W: Write> MatchSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Write one match line and flush it
    pub fn emit(&self, shard: usize, candidate: &[u8]) -> io::Result<()> {
        let line = format_match_line(shard, candidate);

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::other("match sink lock poisoned"))?;
        writer.write_all(&line)?;
        writer.flush()
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> io::Result<W> {
        self.writer
            .into_inner()
            .map_err(|_| io::Error::other("match sink lock poisoned"))
    }
}

impl MatchSink<Stdout> {
    /// Sink writing to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl MatchSink<BufWriter<File>> {
    /// Sink writing to a newly created (or truncated) file
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

/// Format a match as `"<shard> <candidate>\n"`
///
/// The candidate bytes are written verbatim.
pub fn format_match_line(shard: usize, candidate: &[u8]) -> Vec<u8> {
    let mut line = Vec::with_capacity(candidate.len() + 8);
    line.extend_from_slice(shard.to_string().as_bytes());
    line.push(b' ');
    line.extend_from_slice(candidate);
    line.push(b'\n');
    line
}

/// Parse a line produced by [`format_match_line`] (without the newline)
pub fn parse_match_line(line: &[u8]) -> Option<(usize, &[u8])> {
    let split = line.iter().position(|&b| b == b' ')?;
    let shard = std::str::from_utf8(&line[..split]).ok()?.parse().ok()?;
    Some((shard, &line[split + 1..]))
}
