use crate::checksum::{with_checksum, ChecksumProvider};
use crate::{batched, reference, Alphabet, EncodeError};

/// A base58 encoding strategy. Implementations must agree byte for byte on every input both
/// accept.
pub trait Encoder {
    fn encode(&self, input: &[u8], alphabet: &Alphabet) -> Result<String, EncodeError>;

    /// Writes the checksum over the reserved first four bytes of a copy of `buffer`, then
    /// encodes the copy.
    ///
    /// # Errors
    /// - `ShortBuffer`: `buffer.len() < 4`.
    /// - Anything [`Encoder::encode`] returns.
    fn encode_with_checksum<C>(
        &self,
        buffer: &[u8],
        alphabet: &Alphabet,
        provider: &C,
    ) -> Result<String, EncodeError>
    where
        C: ChecksumProvider + ?Sized,
    {
        let message = with_checksum(provider, buffer)?;
        self.encode(&message, alphabet)
    }
}

/// Long division over a scratch digit array. Accepts any length.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reference;

/// `U256` reduction by 58^10. Accepts up to 32 bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Batched;

impl Encoder for Reference {
    fn encode(&self, input: &[u8], alphabet: &Alphabet) -> Result<String, EncodeError> {
        Ok(reference::encode(input, alphabet))
    }
}

impl Encoder for Batched {
    fn encode(&self, input: &[u8], alphabet: &Alphabet) -> Result<String, EncodeError> {
        batched::encode(input, alphabet)
    }
}
