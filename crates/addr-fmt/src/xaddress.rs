//! The extended "X-Address" format.
//!
//! The pre-checksum layout is a fixed 35 bytes:
//!
//! ```text
//! [0..2]    network prefix (mainnet or testnet)
//! [2..22]   20-byte account id
//! [22]      flag: 0 = no tag, 1 = 32-bit tag, >= 2 reserved
//! [23..27]  destination tag, little-endian (zero when absent)
//! [27..35]  reserved, must be zero
//! ```
//!
//! The layout must stay bit-exact for interoperability with other
//! implementations in the ledger ecosystem.

use xrpl_b58check::B58CheckError;

use crate::classic::{CODEC, decode_account_id, encode_account_id};
use crate::error::{AddrFmtError, AddrFmtResult};
use crate::formats::AccountId;

/// Network prefix of a mainnet X-Address.
pub const MAIN_PREFIX: [u8; 2] = [0x05, 0x44];

/// Network prefix of a testnet X-Address.
pub const TEST_PREFIX: [u8; 2] = [0x04, 0x93];

/// Largest encodable destination tag.
pub const MAX_TAG: u64 = u32::MAX as u64;

/// Pre-checksum layout length in bytes.
const LAYOUT_LEN: usize = 35;

/// Offset of the flag byte within the layout.
const FLAG_OFFSET: usize = 22;

/// A decoded X-Address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XAddress {
    account_id: AccountId,
    tag: Option<u32>,
    is_test: bool,
}

impl XAddress {
    /// Constructs a new instance from its parts.
    pub fn new(account_id: AccountId, tag: Option<u32>, is_test: bool) -> Self {
        Self {
            account_id,
            tag,
            is_test,
        }
    }

    /// Gets the 20-byte account id.
    pub fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    /// Gets the destination tag, if one is embedded.
    pub fn tag(&self) -> Option<u32> {
        self.tag
    }

    /// Whether the address targets the test network.
    pub fn is_test(&self) -> bool {
        self.is_test
    }
}

/// Encodes an account id, optional destination tag, and network flag as an
/// X-Address.
///
/// Fails with [`AddrFmtError::InvalidTag`] when the tag exceeds [`MAX_TAG`].
pub fn encode_x_address(
    account_id: &AccountId,
    tag: Option<u64>,
    is_test: bool,
) -> AddrFmtResult<String> {
    let tag = match tag {
        Some(t) if t > MAX_TAG => return Err(AddrFmtError::InvalidTag(t)),
        Some(t) => Some(t as u32),
        None => None,
    };

    let mut buf = Vec::with_capacity(LAYOUT_LEN);
    buf.extend_from_slice(if is_test { &TEST_PREFIX } else { &MAIN_PREFIX });
    buf.extend_from_slice(account_id);
    buf.push(tag.is_some() as u8);
    buf.extend_from_slice(&tag.unwrap_or(0).to_le_bytes());
    buf.extend_from_slice(&[0u8; 8]);

    Ok(CODEC.encode_checked(&buf))
}

/// Decodes an X-Address into its account id, tag, and network flag.
pub fn decode_x_address(x_address: &str) -> AddrFmtResult<XAddress> {
    let decoded = CODEC.decode_check(x_address)?;
    if decoded.len() != LAYOUT_LEN {
        return Err(B58CheckError::LengthMismatch {
            expected: LAYOUT_LEN,
            got: decoded.len(),
        }
        .into());
    }

    let prefix = [decoded[0], decoded[1]];
    let is_test = if prefix == MAIN_PREFIX {
        false
    } else if prefix == TEST_PREFIX {
        true
    } else {
        return Err(AddrFmtError::InvalidPrefix(prefix));
    };

    let mut account_id = [0u8; 20];
    account_id.copy_from_slice(&decoded[2..FLAG_OFFSET]);

    let tag = match decoded[FLAG_OFFSET] {
        0 => {
            if decoded[23..31].iter().any(|&b| b != 0) {
                return Err(AddrFmtError::ReservedBytesNonZero);
            }
            None
        }
        1 => {
            let mut tag_bytes = [0u8; 4];
            tag_bytes.copy_from_slice(&decoded[23..27]);
            Some(u32::from_le_bytes(tag_bytes))
        }
        flag => return Err(AddrFmtError::UnsupportedXAddress(flag)),
    };

    Ok(XAddress::new(account_id, tag, is_test))
}

/// Converts a classic address plus optional tag to an X-Address.
pub fn classic_address_to_x_address(
    address: &str,
    tag: Option<u64>,
    is_test: bool,
) -> AddrFmtResult<String> {
    let account_id = decode_account_id(address)?;
    encode_x_address(&account_id, tag, is_test)
}

/// Converts an X-Address back to a classic address, returning the address,
/// the embedded tag, and the network flag.
pub fn x_address_to_classic_address(x_address: &str) -> AddrFmtResult<(String, Option<u32>, bool)> {
    let x = decode_x_address(x_address)?;
    let classic = encode_account_id(x.account_id())?;
    Ok((classic, x.tag(), x.is_test()))
}

/// Checks whether a string is a well-formed X-Address.
pub fn is_valid_x_address(x_address: &str) -> bool {
    decode_x_address(x_address).is_ok()
}
