//! crates/test-support/src/lib.rs
//!
//! Helpers shared by the workspace's integration tests: scratch directories
//! and a parser that splits a written record back into its pieces.

use std::fs;
use std::path::Path;

pub use tempfile::TempDir;

/// Creates a fresh temporary directory removed on drop.
#[must_use]
pub fn scratch_dir() -> TempDir {
    tempfile::tempdir().expect("create scratch directory")
}

/// Reads `path` and returns its lines without terminators.
#[must_use]
pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap_or_else(|error| panic!("read {}: {error}", path.display()))
        .lines()
        .map(str::to_owned)
        .collect()
}

/// A record line split into its prefix components and body.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsedRecord {
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM:SS`.
    pub time: String,
    /// Millisecond component as written.
    pub millis: u32,
    /// Nanosecond component as written.
    pub nanos: u32,
    /// Severity tag including its surrounding spaces, e.g. `" [ INFO ] "`.
    pub tag: String,
    /// Everything after the tag.
    pub body: String,
}

const TAG_LEN: usize = " [ INFO ] ".len();

/// Splits a record line (without color codes or newline) into its components.
///
/// Returns `None` when the line does not follow the
/// `YYYY-MM-DD HH:MM:SS:<ms>:<ns> [ TAG ] <body>` layout.
#[must_use]
pub fn parse_record(line: &str) -> Option<ParsedRecord> {
    let tag_start = line.find(" [ ")?;
    let (stamp, rest) = line.split_at(tag_start);
    let tag = rest.get(..TAG_LEN)?;
    if !tag.ends_with(" ] ") {
        return None;
    }
    let body = &rest[TAG_LEN..];

    let (date, clock) = stamp.split_once(' ')?;
    let mut pieces = clock.rsplitn(3, ':');
    let nanos = pieces.next()?.parse().ok()?;
    let millis = pieces.next()?.parse().ok()?;
    let time = pieces.next()?;

    let well_formed = date.len() == 10 && time.len() == 8 && time.split(':').count() == 3;
    well_formed.then(|| ParsedRecord {
        date: date.to_owned(),
        time: time.to_owned(),
        millis,
        nanos,
        tag: tag.to_owned(),
        body: body.to_owned(),
    })
}
