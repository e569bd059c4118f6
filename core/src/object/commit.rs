use std::collections::BTreeMap;
use std::fmt::Write;
use std::str;

use chrono::{FixedOffset, Local, Offset, TimeZone, Utc};
use thiserror::Error;

use super::parse_utils::{format_tz, header, split_once, tz_from_str};
use super::Id;

/// Every tracked file name at one point in history, mapped to its blob.
pub type Snapshot = BTreeMap<String, Id>;

/// Message of the root commit every repository starts with.
pub const INITIAL_MESSAGE: &str = "initial commit";

/// An error which can be returned when decoding a stored commit.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseCommitError {
    #[error("missing or malformed `time` header")]
    Time,

    #[error("malformed `{0}` header")]
    Header(&'static str),

    #[error("unexpected line `{0}`")]
    Unexpected(String),

    #[error("message is not valid UTF-8")]
    Message,
}

/// An immutable node in the history graph.
///
/// The `timestamp` value is in milliseconds relative to the Unix epoch;
/// `tz_offset` is the committer's offset from UTC in minutes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Commit {
    id: Id,
    timestamp: i64,
    tz_offset: i16,
    message: String,
    parents: Vec<Id>,
    tracked: Snapshot,
}

impl Commit {
    /// Create a commit stamped with the current local time.
    pub fn new(message: &str, parents: Vec<Id>, tracked: Snapshot) -> Commit {
        let now = Local::now();
        let tz_offset = (now.offset().local_minus_utc() / 60) as i16;
        Commit::with_timestamp(message, parents, tracked, now.timestamp_millis(), tz_offset)
    }

    /// The sentinel root commit: epoch timestamp, no parents, nothing tracked.
    pub fn initial() -> Commit {
        Commit::with_timestamp(INITIAL_MESSAGE, Vec::new(), Snapshot::new(), 0, 0)
    }

    pub fn with_timestamp(
        message: &str,
        parents: Vec<Id>,
        tracked: Snapshot,
        timestamp: i64,
        tz_offset: i16,
    ) -> Commit {
        let payload = encode(timestamp, tz_offset, message, &parents, &tracked);
        Commit {
            id: Id::digest(&[payload.as_slice()]),
            timestamp,
            tz_offset,
            message: message.to_string(),
            parents,
            tracked,
        }
    }

    /// Decode a commit from its stored payload. The ID is recomputed from the payload.
    pub fn parse(payload: &[u8]) -> Result<Commit, ParseCommitError> {
        let (headers, message) = split_message(payload);
        let mut lines = headers.split(|b| *b == b'\n');

        let (timestamp, tz_offset) = lines
            .next()
            .and_then(|line| header(line, b"time"))
            .and_then(parse_time)
            .ok_or(ParseCommitError::Time)?;

        let mut parents = Vec::new();
        let mut tracked = Snapshot::new();

        for line in lines {
            if let Some(value) = header(line, b"parent") {
                parents.push(Id::from_hex(value).map_err(|_| ParseCommitError::Header("parent"))?);
            } else if let Some(value) = header(line, b"file") {
                let (id, name) = split_once(value, &b' ');
                let id = Id::from_hex(id).map_err(|_| ParseCommitError::Header("file"))?;
                let name = str::from_utf8(name).map_err(|_| ParseCommitError::Header("file"))?;
                if name.is_empty() {
                    return Err(ParseCommitError::Header("file"));
                }
                tracked.insert(name.to_string(), id);
            } else {
                return Err(ParseCommitError::Unexpected(
                    String::from_utf8_lossy(line).into_owned(),
                ));
            }
        }

        let message = str::from_utf8(message).map_err(|_| ParseCommitError::Message)?;

        Ok(Commit {
            id: Id::digest(&[payload]),
            timestamp,
            tz_offset,
            message: message.to_string(),
            parents,
            tracked,
        })
    }

    /// The canonical form that is hashed into the ID and written to the object store.
    pub fn payload(&self) -> Vec<u8> {
        encode(
            self.timestamp,
            self.tz_offset,
            &self.message,
            &self.parents,
            &self.tracked,
        )
    }

    pub fn id(&self) -> &Id {
        &self.id
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn tz_offset(&self) -> i16 {
        self.tz_offset
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn parents(&self) -> &[Id] {
        &self.parents
    }

    pub fn first_parent(&self) -> Option<&Id> {
        self.parents.first()
    }

    pub fn is_merge(&self) -> bool {
        self.parents.len() >= 2
    }

    /// The tracked-file snapshot recorded by this commit.
    pub fn tracked(&self) -> &Snapshot {
        &self.tracked
    }

    /// Returns the commit date formatted like `Thu Jan 1 00:00:00 1970 +0000`.
    pub fn format_date(&self) -> String {
        let offset = FixedOffset::east_opt(i32::from(self.tz_offset) * 60).unwrap_or(Utc.fix());

        match offset.timestamp_millis_opt(self.timestamp).single() {
            Some(date) => date.format("%a %b %-d %H:%M:%S %Y %z").to_string(),
            None => format!("@{} {}", self.timestamp, format_tz(self.tz_offset)),
        }
    }

    /// Returns the record printed for this commit by `log` and `global-log`.
    pub fn log_entry(&self) -> String {
        let mut entry = String::new();
        let _ = writeln!(entry, "===");
        let _ = writeln!(entry, "commit {}", self.id);
        if self.is_merge() {
            let _ = writeln!(
                entry,
                "Merge: {} {}",
                self.parents[0].short(),
                self.parents[1].short()
            );
        }
        let _ = writeln!(entry, "Date: {}", self.format_date());
        let _ = writeln!(entry, "{}", self.message);
        entry
    }
}

fn encode(
    timestamp: i64,
    tz_offset: i16,
    message: &str,
    parents: &[Id],
    tracked: &Snapshot,
) -> Vec<u8> {
    let mut s = format!("time {} {}\n", timestamp, format_tz(tz_offset));

    for parent in parents {
        let _ = writeln!(s, "parent {}", parent);
    }

    for (name, id) in tracked {
        let _ = writeln!(s, "file {} {}", id, name);
    }

    s.push('\n');
    s.push_str(message);
    s.into_bytes()
}

fn split_message(payload: &[u8]) -> (&[u8], &[u8]) {
    match payload.windows(2).position(|w| w == b"\n\n") {
        Some(n) => (&payload[..n], &payload[n + 2..]),
        None => (payload, &[]),
    }
}

fn parse_time(value: &[u8]) -> Option<(i64, i16)> {
    let (timestamp, tz) = split_once(value, &b' ');
    let timestamp: i64 = str::from_utf8(timestamp).ok()?.parse().ok()?;
    let tz_offset = tz_from_str(tz)?;

    // Reject anything that could not be rendered as a date.
    let offset = FixedOffset::east_opt(i32::from(tz_offset) * 60)?;
    offset.timestamp_millis_opt(timestamp).single()?;

    Some((timestamp, tz_offset))
}
