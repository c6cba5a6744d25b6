//! External Format Adapter
//!
//! Textual encoding: `bucket "|" major [":" minor]`, for example `0|hzzzzz`
//! or `1|U:0i`. The minor keeps its `:` when stored on a [`Position`].

use super::alphabet::is_symbol;
use super::position::{Bucket, Position};
use crate::error::{RankError, Result};
use tracing::debug;

/// Separates the bucket digit from the major
pub const BUCKET_SEPARATOR: char = '|';

/// Introduces the minor
pub const MINOR_SEPARATOR: char = ':';

/// Parse `bucket|major[:minor]` into a [`Position`]
///
/// Any deviation from the grammar is rejected as a whole.
///
/// # Example
///
/// ```
/// use lexorank_core::parse_position;
///
/// let p = parse_position("1|hzz:a").unwrap();
/// assert_eq!(p.bucket().value(), 1);
/// assert_eq!(p.major(), "hzz");
/// assert_eq!(p.minor(), Some(":a"));
///
/// assert!(parse_position("1|hz z").is_err());
/// ```
pub fn parse_position(text: &str) -> Result<Position> {
    let (bucket, rest) = text
        .split_once(BUCKET_SEPARATOR)
        .ok_or_else(|| reject(text, "missing bucket separator"))?;

    let bucket = match bucket.as_bytes() {
        [digit] => Bucket::from_digit(*digit).ok_or_else(|| reject(text, "unknown bucket"))?,
        _ => return Err(reject(text, "bucket must be a single digit")),
    };

    let (major, minor) = match rest.find(MINOR_SEPARATOR) {
        Some(idx) => (&rest[..idx], Some(&rest[idx..])),
        None => (rest, None),
    };

    if !is_symbol_run(major) {
        return Err(reject(text, "major must be one or more alphabet symbols"));
    }
    if let Some(minor) = minor {
        if !is_symbol_run(&minor[MINOR_SEPARATOR.len_utf8()..]) {
            return Err(reject(text, "minor must be one or more alphabet symbols"));
        }
    }

    Ok(Position::new(bucket, major, minor.map(str::to_string)))
}

/// Render a [`Position`] as `bucket|major` followed by its minor, if any
pub fn format_position(position: &Position) -> String {
    let minor = position.minor().unwrap_or("");
    let mut out = String::with_capacity(2 + position.major().len() + minor.len());
    out.push(position.bucket().digit());
    out.push(BUCKET_SEPARATOR);
    out.push_str(position.major());
    out.push_str(minor);
    out
}

fn is_symbol_run(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(is_symbol)
}

fn reject(text: &str, reason: &str) -> RankError {
    debug!(text, reason, "rejected rank text");
    RankError::InvalidFormat(format!("{:?}: {}", text, reason))
}
