//! Encode/decode entry points for the classic address formats.

use xrpl_b58check::Codec;

use crate::error::AddrFmtResult;
use crate::formats::{
    self, ACCOUNT_ID_LEN, AccountId, PUBLIC_KEY_LEN, PublicKey, SEED_ENTROPY_LEN, SeedEntropy,
    SeedType,
};

/// The single codec instance all formats share.
pub(crate) const CODEC: Codec = Codec::new(bs58::Alphabet::RIPPLE);

/// Encodes 16 bytes of seed entropy under the given scheme's version prefix.
pub fn encode_seed(entropy: &[u8], seed_type: SeedType) -> AddrFmtResult<String> {
    let spec = match seed_type {
        SeedType::Ed25519 => &formats::ED25519_SEED,
        SeedType::Secp256k1 => &formats::FAMILY_SEED,
    };
    let version = spec.alternatives()[0].bytes();

    Ok(CODEC.encode_versioned(entropy, &[version], SEED_ENTROPY_LEN)?)
}

/// Decodes a seed of either scheme, reporting which one matched.
pub fn decode_seed(seed: &str) -> AddrFmtResult<(SeedEntropy, SeedType)> {
    let decoded = CODEC.decode(seed, &formats::SEED)?;
    let seed_type = SeedType::from_label(decoded.label())
        .ok_or(xrpl_b58check::B58CheckError::NoVersionMatch)?;

    Ok((to_array(decoded.into_payload()), seed_type))
}

/// Encodes a 20-byte account id as a classic address.
pub fn encode_account_id(account_id: &[u8]) -> AddrFmtResult<String> {
    Ok(CODEC.encode_versioned(account_id, &[&[0x00]], ACCOUNT_ID_LEN)?)
}

/// Decodes a classic address into its 20-byte account id.
pub fn decode_account_id(address: &str) -> AddrFmtResult<AccountId> {
    let decoded = CODEC.decode(address, &formats::ACCOUNT_ID)?;
    Ok(to_array(decoded.into_payload()))
}

/// Encodes a 33-byte validator/node public key.
pub fn encode_node_public(key: &[u8]) -> AddrFmtResult<String> {
    Ok(CODEC.encode_versioned(key, &[&[0x1C]], PUBLIC_KEY_LEN)?)
}

/// Decodes a validator/node public key.
pub fn decode_node_public(s: &str) -> AddrFmtResult<PublicKey> {
    let decoded = CODEC.decode(s, &formats::NODE_PUBLIC)?;
    Ok(to_array(decoded.into_payload()))
}

/// Encodes a 33-byte account public key.
pub fn encode_account_public(key: &[u8]) -> AddrFmtResult<String> {
    Ok(CODEC.encode_versioned(key, &[&[0x23]], PUBLIC_KEY_LEN)?)
}

/// Decodes an account public key.
pub fn decode_account_public(s: &str) -> AddrFmtResult<PublicKey> {
    let decoded = CODEC.decode(s, &formats::ACCOUNT_PUBLIC_KEY)?;
    Ok(to_array(decoded.into_payload()))
}

/// Checks whether a string is a well-formed classic address.
pub fn is_valid_classic_address(address: &str) -> bool {
    decode_account_id(address).is_ok()
}

/// Converts a payload whose length the format's `VersionSpec` already
/// enforced.
fn to_array<const N: usize>(payload: Vec<u8>) -> [u8; N] {
    payload.try_into().expect("addr: payload length checked")
}
