//! Alphabet Codec: symbol <-> ordinal mapping
//!
//! Ranks are written over 62 symbols laid out in ASCII order:
//! - `0`-`9` map to 0..=9
//! - `A`-`Z` map to 10..=35
//! - `a`-`z` map to 36..=61
//!
//! Because the table follows ASCII, byte-wise string comparison agrees with
//! ordinal comparison.

/// Symbols indexed by ordinal
pub const ALPHABET: &[u8; ALPHABET_SIZE] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Number of symbols in the alphabet
pub const ALPHABET_SIZE: usize = 62;

/// Largest ordinal
pub const MAX_ORDER: u8 = (ALPHABET_SIZE - 1) as u8;

/// Lowest symbol, used to pad lower bounds
pub const MIN_SYMBOL: u8 = b'0';

/// Highest symbol, used to pad upper bounds
pub const MAX_SYMBOL: u8 = b'z';

/// Largest batch size accepted; larger requests are rejected outright.
///
/// The widest gap spans 61 ordinals, so at most 60 ranks fit at one symbol
/// position. A batch of exactly 61 always ends in `NoRoomAvailable`.
pub const MAX_BATCH: usize = ALPHABET_SIZE - 1;

/// Ordinal of a byte.
///
/// Total over all bytes: anything below `'A'` that is not a digit clamps to
/// 0, any other byte outside the alphabet clamps to [`MAX_ORDER`].
pub const fn order(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'A'..=b'Z' => byte - b'A' + 10,
        b'a'..=b'z' => byte - b'a' + 36,
        _ if byte < b'A' => 0,
        _ => MAX_ORDER,
    }
}

/// Symbol for an ordinal. Ordinals above [`MAX_ORDER`] clamp to the maximal symbol.
pub const fn symbol(order: u8) -> u8 {
    if order > MAX_ORDER {
        MAX_SYMBOL
    } else {
        ALPHABET[order as usize]
    }
}

/// Whether a byte belongs to the alphabet
pub const fn is_symbol(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
}
