//! Generic versioned Base58Check codec.
//!
//! Payloads are prefixed with one or more version bytes, suffixed with a
//! 4-byte double-SHA-256 checksum, and converted to text with a base-58
//! alphabet. Decoding validates the checksum and matches the version
//! prefix against a [`VersionSpec`] describing the admissible versions.

mod codec;
mod error;
mod version;

pub use codec::{CHECKSUM_LEN, Codec, verify_checksum};
pub use error::{B58CheckError, B58CheckResult};
pub use version::{Decoded, VersionAlt, VersionSpec};
