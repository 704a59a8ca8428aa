//! Reference base58 encoder: repeated long division over a big-endian base-58 digit array.
//! Each input byte applies `digits = digits * 256 + byte` with a right-to-left carry pass.
//! Perf: O(n^2) digit passes; no length bound beyond scratch sizing.
use crate::{Alphabet, EncodeError};

/// Scratch bytes needed to expand `significant` non-zero-led input bytes into base-58 digits.
///
/// 138/100 over-approximates log(256)/log(58) ~= 1.3657, plus one digit of headroom.
#[must_use]
#[inline]
pub const fn scratch_len(significant: usize) -> usize {
    if significant == 0 {
        0
    } else {
        significant * 138 / 100 + 1
    }
}

/// Encodes `input`, allocating an exactly sized scratch buffer.
#[must_use]
pub fn encode(input: &[u8], alphabet: &Alphabet) -> String {
    let zeros = input.iter().take_while(|&&b| b == 0).count();
    let mut scratch = vec![0u8; scratch_len(input.len() - zeros)];
    convert(input, zeros, &mut scratch, alphabet)
}

/// Encodes `input` using caller-provided scratch space.
///
/// Only the first [`scratch_len`] bytes of `scratch` are touched, so a generously sized
/// buffer (the classic `3 * input.len()`) costs nothing extra per call.
///
/// # Errors
/// - `UndersizedScratchBuffer`: `scratch` cannot hold the base-58 expansion of `input`.
pub fn encode_with_scratch(
    input: &[u8],
    scratch: &mut [u8],
    alphabet: &Alphabet,
) -> Result<String, EncodeError> {
    let zeros = input.iter().take_while(|&&b| b == 0).count();
    let needed = scratch_len(input.len() - zeros);
    if scratch.len() < needed {
        tracing::debug!(needed, got = scratch.len(), "scratch buffer too small");
        return Err(EncodeError::UndersizedScratchBuffer {
            needed,
            got: scratch.len(),
        });
    }
    Ok(convert(input, zeros, &mut scratch[..needed], alphabet))
}

fn convert(input: &[u8], zeros: usize, digits: &mut [u8], alphabet: &Alphabet) -> String {
    digits.fill(0);
    for &byte in &input[zeros..] {
        let mut carry = u32::from(byte);
        for digit in digits.iter_mut().rev() {
            carry += 256 * u32::from(*digit);
            #[allow(clippy::cast_possible_truncation)]
            let value = (carry % 58) as u8;
            *digit = value;
            carry /= 58;
        }
        assert_eq!(carry, 0, "base58 digit array overflow: scratch sizing bug");
    }
    let skip = digits.iter().take_while(|&&d| d == 0).count();
    let significant = &digits[skip..];
    let mut result = String::with_capacity(zeros + significant.len());
    result.extend(std::iter::repeat_n(char::from(alphabet.zero()), zeros));
    result.extend(significant.iter().map(|&d| char::from(alphabet.glyph(d))));
    result
}
