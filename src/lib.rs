//! Base58 encoding with checksum, in two strategies that must agree byte for byte.
//!
//! - [`reference`]: classic base-256 to base-58 long division over a scratch digit array.
//! - [`batched`]: parses the input as a `U256`, reduces it by 58^10 into 64-bit super-digits,
//!   then expands each super-digit into ten base-58 digits with machine-word division.
//!
//! The alphabet is always passed in explicitly; see [`Alphabet`].
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

mod alphabet;
pub mod batched;
pub mod checksum;
mod encoder;
mod error;
pub mod reference;

pub use alphabet::Alphabet;
pub use checksum::{apply_checksum, with_checksum, ChecksumProvider, DoubleSha256, CHECKSUM_LEN};
pub use encoder::{Batched, Encoder, Reference};
pub use error::{AlphabetError, EncodeError};
