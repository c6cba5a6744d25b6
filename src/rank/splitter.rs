//! Interval Splitter: N new ranks strictly between two bounds
//!
//! # Algorithm
//!
//! Both bounds are walked in lockstep, one symbol at a time:
//!
//! 1. Equal symbols extend a shared prefix.
//! 2. At the first difference, N evenly spaced symbols are placed strictly
//!    between the two ordinals, if the gap allows it.
//! 3. Otherwise the walk descends on the side with more room one level
//!    deeper; the other bound stops constraining and reads as its sentinel
//!    (`0` below, `z` above) from then on.
//! 4. The walk never goes deeper than the longer of the two bounds.
//!
//! A missing bound is a sentinel: an absent lower reads as `0` repeated, an
//! absent upper as `z` repeated.
//!
//! # Example
//!
//! ```
//! use lexorank_core::split_interval;
//!
//! let ranks = split_interval(Some("0"), Some("z"), 3).unwrap();
//! assert_eq!(ranks, vec!["F", "U", "j"]);
//! ```

use super::alphabet::{is_symbol, order, symbol, MAX_BATCH, MAX_ORDER};
use super::format::MINOR_SEPARATOR;
use super::padding::pad_to;
use super::position::{Bucket, Position};
use crate::error::{RankError, Result};
use tracing::trace;

/// One side of the interval being split
#[derive(Debug, Clone, Copy)]
struct Bound<'a> {
    digits: &'a [u8],
    /// Whether this side still constrains positions past the shared prefix
    live: bool,
    /// Ordinal read once this side no longer constrains
    sentinel: u8,
}

impl<'a> Bound<'a> {
    fn lower(digits: Option<&'a str>) -> Self {
        Self {
            digits: digits.map(str::as_bytes).unwrap_or_default(),
            live: digits.is_some(),
            sentinel: 0,
        }
    }

    fn upper(digits: Option<&'a str>) -> Self {
        Self {
            digits: digits.map(str::as_bytes).unwrap_or_default(),
            live: digits.is_some(),
            sentinel: MAX_ORDER,
        }
    }

    /// Ordinal at `index`, or `None` when a live bound has run out.
    ///
    /// A live lower bound that has run out reads as the minimal symbol. A
    /// live upper bound that has run out admits nothing beneath it.
    fn at(&self, index: usize) -> Option<u8> {
        if !self.live {
            return Some(self.sentinel);
        }
        match self.digits.get(index) {
            Some(&b) => Some(order(b)),
            None if self.sentinel == 0 => Some(0),
            None => None,
        }
    }
}

/// Split the interval between two bare symbol strings into `n` ranks
///
/// `None` stands for an absent bound. Returned strings are strictly
/// increasing, strictly between the bounds, and of equal length.
///
/// Bounds containing bytes outside the alphabet are rejected with
/// [`RankError::NoRoomAvailable`].
pub fn split_interval(
    lower: Option<&str>,
    upper: Option<&str>,
    n: usize,
) -> Result<Vec<String>> {
    if n > MAX_BATCH {
        return Err(RankError::BatchTooLarge {
            requested: n,
            max: MAX_BATCH,
        });
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    // Clamped ordinals only agree with byte order inside the alphabet.
    for bound in [lower, upper].into_iter().flatten() {
        if !bound.bytes().all(is_symbol) {
            trace!(bound, "bound outside the alphabet");
            return Err(RankError::NoRoomAvailable);
        }
    }

    // An empty lower bound admits everything, same as an absent one.
    let lower = lower.filter(|l| !l.is_empty());

    if let (Some(l), Some(u)) = (lower, upper) {
        if l >= u {
            trace!(lower = l, upper = u, "bounds equal or inverted");
            return Err(RankError::NoRoomAvailable);
        }
    }

    // Sentinels are one symbol longer than the bound they face.
    let span = match (lower, upper) {
        (Some(l), Some(u)) => l.len().max(u.len()),
        (Some(l), None) => l.len() + 1,
        (None, Some(u)) => u.len() + 1,
        (None, None) => 1,
    };

    let mut low = Bound::lower(lower);
    let mut high = Bound::upper(upper);
    let mut prefix = String::with_capacity(span);

    for index in 0..span {
        let prev = low.at(index).unwrap_or(0);
        let Some(next) = high.at(index) else {
            trace!(index, "upper bound exhausted");
            return Err(RankError::NoRoomAvailable);
        };

        if prev == next {
            prefix.push(symbol(prev) as char);
            continue;
        }

        let spacing = next.saturating_sub(prev) as usize / (n + 1);
        if spacing >= 1 {
            trace!(index, prev, next, spacing, "placing ranks");
            let width = span - 1;
            let ranks = (1..=n)
                .map(|j| {
                    let mut rank = prefix.clone();
                    rank.push(symbol(prev + (spacing * j) as u8) as char);
                    pad_to(rank, width)
                })
                .collect();
            return Ok(ranks);
        }

        let after_prev = MAX_ORDER - low.at(index + 1).unwrap_or(0);
        let before_next = high.at(index + 1).unwrap_or(0);

        if before_next > after_prev {
            trace!(index, after_prev, before_next, "no room; descending below upper");
            prefix.push(symbol(next) as char);
            low.live = false;
        } else {
            trace!(index, after_prev, before_next, "no room; descending above lower");
            prefix.push(symbol(prev) as char);
            high.live = false;
        }
    }

    trace!(span, n, "precision exhausted");
    Err(RankError::NoRoomAvailable)
}

/// Generates ranks between [`Position`] bounds
///
/// Carries the bucket used when neither bound is present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntervalSplitter {
    default_bucket: Bucket,
}

impl IntervalSplitter {
    /// Create a splitter placing unbounded ranks in `default_bucket`
    pub fn new(default_bucket: Bucket) -> Self {
        Self { default_bucket }
    }

    /// Bucket used when both bounds are absent
    pub fn default_bucket(&self) -> Bucket {
        self.default_bucket
    }

    /// `n` positions strictly between `lower` and `upper`, in increasing order
    ///
    /// Results take the bucket of the bounds. When the bounds sit in
    /// different buckets the lower bucket wins and the upper bound is
    /// treated as absent. Identical majors are split on their minors.
    pub fn generate(
        &self,
        lower: Option<&Position>,
        upper: Option<&Position>,
        n: usize,
    ) -> Result<Vec<Position>> {
        if n > MAX_BATCH {
            return Err(RankError::BatchTooLarge {
                requested: n,
                max: MAX_BATCH,
            });
        }
        if n == 0 {
            return Ok(Vec::new());
        }

        let upper = match (lower, upper) {
            (Some(l), Some(u)) if l.bucket() > u.bucket() => {
                return Err(RankError::NoRoomAvailable);
            }
            (Some(l), Some(u)) if l.bucket() < u.bucket() => None,
            _ => upper,
        };

        let bucket = lower
            .or(upper)
            .map(Position::bucket)
            .unwrap_or(self.default_bucket);

        if let (Some(l), Some(u)) = (lower, upper) {
            if l.major() == u.major() {
                return Self::split_minors(bucket, l, u, n);
            }
        }

        let majors = split_interval(
            lower.map(Position::major),
            upper.map(Position::major),
            n,
        )?;
        Ok(majors
            .into_iter()
            .map(|major| Position::new(bucket, major, None))
            .collect())
    }

    fn split_minors(
        bucket: Bucket,
        lower: &Position,
        upper: &Position,
        n: usize,
    ) -> Result<Vec<Position>> {
        if lower >= upper {
            return Err(RankError::NoRoomAvailable);
        }
        // Same major and lower < upper, so the upper side has a minor.
        let upper_minor = upper.minor_digits().ok_or(RankError::NoRoomAvailable)?;

        trace!(major = lower.major(), "majors identical; splitting minors");
        let minors = split_interval(lower.minor_digits(), Some(upper_minor), n)?;
        Ok(minors
            .into_iter()
            .map(|minor| {
                let mut tagged = String::with_capacity(minor.len() + 1);
                tagged.push(MINOR_SEPARATOR);
                tagged.push_str(&minor);
                Position::new(bucket, lower.major(), Some(tagged))
            })
            .collect())
    }
}

/// `n` positions strictly between `lower` and `upper`
///
/// Uses the default bucket when both bounds are absent. See
/// [`IntervalSplitter::generate`].
///
/// # Example
///
/// ```
/// use lexorank_core::{generate_ranks, parse_position, RankError};
///
/// let lower = parse_position("0|0").unwrap();
/// let upper = parse_position("0|z").unwrap();
///
/// let ranks = generate_ranks(Some(&lower), Some(&upper), 1).unwrap();
/// assert_eq!(ranks[0].to_string(), "0|U");
///
/// let err = generate_ranks(Some(&lower), Some(&upper), 62).unwrap_err();
/// assert!(matches!(err, RankError::BatchTooLarge { .. }));
/// ```
pub fn generate_ranks(
    lower: Option<&Position>,
    upper: Option<&Position>,
    n: usize,
) -> Result<Vec<Position>> {
    IntervalSplitter::default().generate(lower, upper, n)
}

/// A single position strictly between `lower` and `upper`
pub fn generate_rank(lower: Option<&Position>, upper: Option<&Position>) -> Result<Position> {
    generate_ranks(lower, upper, 1)?
        .into_iter()
        .next()
        .ok_or(RankError::NoRoomAvailable)
}
