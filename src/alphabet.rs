use crate::error::AlphabetError;

/// Ordered set of 58 distinct printable ASCII glyphs; position `i` renders digit `i`.
///
/// Index 0 is the zero glyph, also used to render leading zero bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    glyphs: [u8; 58],
}

impl Alphabet {
    pub const BITCOIN: Alphabet =
        Alphabet::new_unchecked(b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz");

    pub const RIPPLE: Alphabet =
        Alphabet::new_unchecked(b"rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz");

    /// Validates and wraps a caller-supplied alphabet.
    ///
    /// # Errors
    /// - `NonPrintable`: a byte outside `0x21..=0x7e`.
    /// - `Duplicate`: the same glyph at two positions.
    pub fn new(glyphs: &[u8; 58]) -> Result<Self, AlphabetError> {
        let mut seen = [None::<usize>; 128];
        for (index, &byte) in glyphs.iter().enumerate() {
            if !byte.is_ascii_graphic() {
                tracing::debug!(index, byte, "rejecting alphabet with non-printable glyph");
                return Err(AlphabetError::NonPrintable { index, byte });
            }
            if let Some(first) = seen[usize::from(byte)] {
                tracing::debug!(first, second = index, byte, "rejecting alphabet with duplicate glyph");
                return Err(AlphabetError::Duplicate { first, second: index, byte });
            }
            seen[usize::from(byte)] = Some(index);
        }
        Ok(Self { glyphs: *glyphs })
    }

    const fn new_unchecked(glyphs: &[u8; 58]) -> Self {
        Self { glyphs: *glyphs }
    }

    /// Glyph for digit value 0.
    #[inline]
    #[must_use]
    pub const fn zero(&self) -> u8 {
        self.glyphs[0]
    }

    /// Glyph for `digit`. Panics if `digit >= 58`.
    #[inline]
    #[must_use]
    pub const fn glyph(&self, digit: u8) -> u8 {
        self.glyphs[digit as usize]
    }

    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 58] {
        &self.glyphs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_alphabets_validate() {
        assert_eq!(Alphabet::new(Alphabet::BITCOIN.as_bytes()), Ok(Alphabet::BITCOIN));
        assert_eq!(Alphabet::new(Alphabet::RIPPLE.as_bytes()), Ok(Alphabet::RIPPLE));
        assert_eq!(Alphabet::BITCOIN.zero(), b'1');
        assert_eq!(Alphabet::RIPPLE.zero(), b'r');
        assert_eq!(Alphabet::RIPPLE.glyph(57), b'z');
    }

    #[test]
    fn rejects_duplicate_glyph() {
        let mut glyphs = *Alphabet::BITCOIN.as_bytes();
        glyphs[40] = b'A';
        assert_eq!(
            Alphabet::new(&glyphs),
            Err(AlphabetError::Duplicate { first: 9, second: 40, byte: b'A' })
        );
    }

    #[test]
    fn rejects_non_printable() {
        let mut glyphs = *Alphabet::RIPPLE.as_bytes();
        glyphs[3] = b' ';
        assert_eq!(
            Alphabet::new(&glyphs),
            Err(AlphabetError::NonPrintable { index: 3, byte: b' ' })
        );
        glyphs[3] = 0xC3;
        assert!(matches!(Alphabet::new(&glyphs), Err(AlphabetError::NonPrintable { index: 3, .. })));
    }
}
