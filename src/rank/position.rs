//! Position Model: the rank value type
//!
//! A [`Position`] is what callers persist per item. It sorts by
//! `(bucket, major, minor)`, comparing the strings byte-wise and placing an
//! absent minor before any present one.

use super::alphabet::{symbol, MAX_ORDER};
use super::format::{format_position, parse_position, MINOR_SEPARATOR};
use crate::error::{RankError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// Number of buckets partitioning the rank space
pub const BUCKET_COUNT: u8 = 3;

/// Coarse partition tag prefixed to every rank
///
/// Buckets let a caller re-rank an entire list into a fresh partition while
/// the old ranks stay valid. New ranks inherit the bucket of their neighbours.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Bucket(u8);

impl Bucket {
    /// Create a bucket, returning `None` outside `0..BUCKET_COUNT`
    pub const fn new(value: u8) -> Option<Self> {
        if value < BUCKET_COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Bucket for an ASCII digit such as `b'1'`
    pub const fn from_digit(digit: u8) -> Option<Self> {
        if digit.is_ascii_digit() {
            Self::new(digit - b'0')
        } else {
            None
        }
    }

    /// Numeric value of the bucket
    pub const fn value(self) -> u8 {
        self.0
    }

    /// ASCII digit written in the textual form
    pub const fn digit(self) -> char {
        (b'0' + self.0) as char
    }

    /// Following bucket, wrapping around after the last one
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % BUCKET_COUNT)
    }

    /// Preceding bucket, wrapping around before the first one
    pub const fn prev(self) -> Self {
        Self((self.0 + BUCKET_COUNT - 1) % BUCKET_COUNT)
    }
}

impl TryFrom<u8> for Bucket {
    type Error = RankError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
            .ok_or_else(|| RankError::InvalidFormat(format!("bucket {} out of range", value)))
    }
}

impl From<Bucket> for u8 {
    fn from(bucket: Bucket) -> Self {
        bucket.0
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rank: bucket, primary ordered string, optional tiebreaker
///
/// Field order matters: the derived ordering compares `bucket`, then
/// `major`, then `minor`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    bucket: Bucket,
    major: String,
    minor: Option<String>,
}

impl Position {
    /// Assemble a position from already-validated parts
    ///
    /// `minor`, when present, carries its leading `:` separator.
    pub fn new(bucket: Bucket, major: impl Into<String>, minor: Option<String>) -> Self {
        Self {
            bucket,
            major: major.into(),
            minor,
        }
    }

    /// Middle rank of an empty bucket, the natural rank for a first item
    ///
    /// # Example
    ///
    /// ```
    /// use lexorank_core::{Bucket, Position};
    ///
    /// let first = Position::initial(Bucket::default());
    /// assert_eq!(first.to_string(), "0|U");
    /// ```
    pub fn initial(bucket: Bucket) -> Self {
        let mid = symbol(MAX_ORDER / 2) as char;
        Self::new(bucket, mid.to_string(), None)
    }

    /// Partition this rank belongs to
    pub fn bucket(&self) -> Bucket {
        self.bucket
    }

    /// Primary sort key
    pub fn major(&self) -> &str {
        &self.major
    }

    /// Tiebreaker including its leading separator, if any
    pub fn minor(&self) -> Option<&str> {
        self.minor.as_deref()
    }

    /// Tiebreaker without the separator
    pub(crate) fn minor_digits(&self) -> Option<&str> {
        self.minor
            .as_deref()
            .map(|m| m.strip_prefix(MINOR_SEPARATOR).unwrap_or(m))
    }

    /// A new rank strictly between `self` and `other`
    pub fn between(&self, other: &Position) -> Result<Position> {
        super::splitter::generate_rank(Some(self), Some(other))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_position(self))
    }
}

impl FromStr for Position {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self> {
        parse_position(s)
    }
}

impl Serialize for Position {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_position(self))
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_position(&text).map_err(serde::de::Error::custom)
    }
}
