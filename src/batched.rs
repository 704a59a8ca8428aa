//! Batched base58 encoder.
//!
//! The input is parsed as a single `U256` and reduced by 58^10 into at most five 64-bit
//! super-digits. Each super-digit then expands into exactly ten base-58 digits using plain
//! `u64` division, so the wide-integer type sees one division per ten output characters
//! instead of one per character.
use primitive_types::U256;

use crate::{Alphabet, EncodeError};

/// Widest accepted input in bytes (256 bits).
pub const MAX_INPUT_LEN: usize = 32;

/// 58^10, the largest power of 58 below 2^64 that keeps digit expansion in one word.
pub const SUPER_BASE: u64 = 430_804_206_899_405_824;

/// Base-58 digits carried by one super-digit.
pub const DIGITS_PER_GROUP: usize = 10;

// 58^50 > 2^256
const MAX_GROUPS: usize = 5;

/// Base-58 digits of 2^256 - 1.
const MAX_DIGITS: usize = 44;

/// Encodes up to 32 bytes.
///
/// # Errors
/// - `CapacityExceeded`: `input.len() > 32`.
pub fn encode(input: &[u8], alphabet: &Alphabet) -> Result<String, EncodeError> {
    if input.len() > MAX_INPUT_LEN {
        tracing::debug!(len = input.len(), "input exceeds 256-bit capacity");
        return Err(EncodeError::CapacityExceeded { len: input.len() });
    }
    let zeros = input.iter().take_while(|&&b| b == 0).count();

    let (groups, len) = super_digits(U256::from_big_endian(input));
    tracing::trace!(groups = len, "reduced input to super-digits");

    // Least significant digit first.
    let mut output = Vec::with_capacity(len * DIGITS_PER_GROUP);
    for &group in &groups[..len] {
        let mut c = group;
        // All ten, even once c hits zero: an interior zero group still holds ten positions.
        for _ in 0..DIGITS_PER_GROUP {
            #[allow(clippy::cast_possible_truncation)]
            output.push(alphabet.glyph((c % 58) as u8));
            c /= 58;
        }
    }
    // Trailing zero glyphs are the value's leading zero digits.
    while output.last() == Some(&alphabet.zero()) {
        output.pop();
    }
    debug_assert!(output.len() <= MAX_DIGITS);
    output.reverse();

    let mut result = String::with_capacity(zeros + output.len());
    result.extend(std::iter::repeat_n(char::from(alphabet.zero()), zeros));
    result.extend(output.into_iter().map(char::from));
    Ok(result)
}

/// Splits `value` into base-58^10 coefficients, least significant first.
fn super_digits(mut value: U256) -> ([u64; MAX_GROUPS], usize) {
    let base = U256::from(SUPER_BASE);
    let mut groups = [0u64; MAX_GROUPS];
    let mut len = 0;
    while !value.is_zero() {
        let (quotient, remainder) = value.div_mod(base);
        groups[len] = remainder.low_u64();
        len += 1;
        value = quotient;
    }
    (groups, len)
}
