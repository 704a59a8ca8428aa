use thiserror::Error;

/// Failure of a single encode or checksum call. Nothing is partially written on error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Batched encoder input wider than 256 bits.
    #[error("input exceeds 256-bit capacity: {len} bytes")]
    CapacityExceeded { len: usize },
    /// Reference encoder scratch buffer cannot hold the base-58 expansion.
    #[error("scratch buffer too small: need {needed} bytes, got {got}")]
    UndersizedScratchBuffer { needed: usize, got: usize },
    /// Checksum requested on a buffer with no room for the 4-byte prefix.
    #[error("buffer too short for checksum prefix: {len} bytes")]
    ShortBuffer { len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlphabetError {
    #[error("alphabet byte 0x{byte:02x} at index {index} is not printable ascii")]
    NonPrintable { index: usize, byte: u8 },
    #[error("alphabet byte 0x{byte:02x} repeated at indices {first} and {second}")]
    Duplicate { first: usize, second: usize, byte: u8 },
}
