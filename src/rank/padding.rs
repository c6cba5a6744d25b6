//! Length Equalizer
//!
//! Right-pads freshly generated majors so every rank produced by one call
//! has the same length.

/// Filler symbol appended to short ranks
pub const FILLER: u8 = b'0';

/// Pad `value` with [`FILLER`] up to `target_len` bytes.
///
/// Values already at or beyond the target are returned unchanged.
pub fn pad_to(mut value: String, target_len: usize) -> String {
    let missing = target_len.saturating_sub(value.len());
    value.extend(std::iter::repeat(FILLER as char).take(missing));
    value
}
