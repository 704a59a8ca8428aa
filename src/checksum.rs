//! Checksum prefix: the first [`CHECKSUM_LEN`] bytes of a message buffer are reserved for a
//! digest of that buffer.
//!
//! The digest covers the buffer exactly as laid out when it is applied, reserved prefix
//! included. Re-applying to an already checksummed buffer therefore yields a different prefix;
//! apply once to a buffer whose prefix holds the agreed placeholder bytes.
use sha2::{Digest, Sha256};

use crate::error::EncodeError;

pub const CHECKSUM_LEN: usize = 4;

/// Produces a 4-byte digest of an arbitrary-length message.
pub trait ChecksumProvider {
    fn checksum(&self, message: &[u8]) -> [u8; CHECKSUM_LEN];
}

/// First four bytes of SHA-256(SHA-256(message)).
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleSha256;

impl ChecksumProvider for DoubleSha256 {
    fn checksum(&self, message: &[u8]) -> [u8; CHECKSUM_LEN] {
        let hash1 = Sha256::digest(message);
        let hash2 = Sha256::digest(hash1);
        let mut out = [0u8; CHECKSUM_LEN];
        out.copy_from_slice(&hash2[..CHECKSUM_LEN]);
        out
    }
}

/// Overwrites `buffer[0..4]` with the checksum of the whole buffer.
///
/// # Errors
/// - `ShortBuffer`: `buffer.len() < 4`; the buffer is left untouched.
pub fn apply_checksum<C>(provider: &C, buffer: &mut [u8]) -> Result<(), EncodeError>
where
    C: ChecksumProvider + ?Sized,
{
    if buffer.len() < CHECKSUM_LEN {
        tracing::debug!(len = buffer.len(), "buffer too short for checksum prefix");
        return Err(EncodeError::ShortBuffer { len: buffer.len() });
    }
    let digest = provider.checksum(buffer);
    buffer[..CHECKSUM_LEN].copy_from_slice(&digest);
    Ok(())
}

/// Like [`apply_checksum`], but returns a fresh buffer and leaves `buffer` as it was.
///
/// # Errors
/// - `ShortBuffer`: `buffer.len() < 4`.
pub fn with_checksum<C>(provider: &C, buffer: &[u8]) -> Result<Vec<u8>, EncodeError>
where
    C: ChecksumProvider + ?Sized,
{
    let mut out = buffer.to_vec();
    apply_checksum(provider, &mut out)?;
    Ok(out)
}
