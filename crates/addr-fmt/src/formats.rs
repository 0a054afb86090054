//! Well-known version specifications for the ledger's address formats.
//!
//! These mirror the version-byte table used across the ledger ecosystem.
//! All entries are `const` and never change at runtime.

use xrpl_b58check::{VersionAlt, VersionSpec};

/// A 20-byte account identifier (RIPEMD-160 size).
pub type AccountId = [u8; 20];

/// 16 bytes of seed entropy.
pub type SeedEntropy = [u8; 16];

/// A 33-byte compressed public key.
pub type PublicKey = [u8; 33];

/// Byte length of an [`AccountId`].
pub const ACCOUNT_ID_LEN: usize = 20;

/// Byte length of a [`SeedEntropy`].
pub const SEED_ENTROPY_LEN: usize = 16;

/// Byte length of a [`PublicKey`].
pub const PUBLIC_KEY_LEN: usize = 33;

const FAMILY_SEED_ALT: VersionAlt = VersionAlt::new(&[0x21], Some("secp256k1"));
const ED25519_SEED_ALT: VersionAlt = VersionAlt::new(&[0x01, 0xE1, 0x4B], Some("ed25519"));

/// Classic account address, version byte 0x00.
pub const ACCOUNT_ID: VersionSpec =
    VersionSpec::new(&[VersionAlt::new(&[0x00], None)], Some(ACCOUNT_ID_LEN));

/// Account public key, version byte 0x23.
pub const ACCOUNT_PUBLIC_KEY: VersionSpec =
    VersionSpec::new(&[VersionAlt::new(&[0x23], None)], Some(PUBLIC_KEY_LEN));

/// secp256k1 family seed, version byte 0x21.
pub const FAMILY_SEED: VersionSpec =
    VersionSpec::new(&[FAMILY_SEED_ALT], Some(SEED_ENTROPY_LEN));

/// ed25519 seed, three-byte version prefix.
pub const ED25519_SEED: VersionSpec =
    VersionSpec::new(&[ED25519_SEED_ALT], Some(SEED_ENTROPY_LEN));

/// Validator/node public key, version byte 0x1C.
pub const NODE_PUBLIC: VersionSpec =
    VersionSpec::new(&[VersionAlt::new(&[0x1C], None)], Some(PUBLIC_KEY_LEN));

/// Seed of either scheme; decoding tries ed25519 first.
pub const SEED: VersionSpec = VersionSpec::new(
    &[ED25519_SEED_ALT, FAMILY_SEED_ALT],
    Some(SEED_ENTROPY_LEN),
);

/// Key scheme a seed belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedType {
    /// An ed25519 seed.
    Ed25519,
    /// A secp256k1 family seed.
    Secp256k1,
}

impl SeedType {
    /// The label this scheme carries in the version table.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ed25519 => "ed25519",
            Self::Secp256k1 => "secp256k1",
        }
    }

    pub(crate) fn from_label(label: Option<&str>) -> Option<Self> {
        match label {
            Some("ed25519") => Some(Self::Ed25519),
            Some("secp256k1") => Some(Self::Secp256k1),
            _ => None,
        }
    }
}
