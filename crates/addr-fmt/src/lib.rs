//! Address formats for the XRP Ledger.
//!
//! Classic addresses, seeds, and public keys are versioned Base58Check
//! strings over the ledger alphabet
//! `rpshnaf39wBUDNEGHJKLM4PQRST7VWXYZ2bcdeCg65jkm8oFqi1tuvAxyz`. The
//! extended "X-Address" form additionally packs an optional 32-bit
//! destination tag and a test-network flag into the same checksummed
//! encoding.
//!
//! All functions are pure and operate on immutable inputs; the only shared
//! state is `const` format tables.

mod classic;
mod error;
pub mod formats;
mod xaddress;

pub use classic::{
    decode_account_id, decode_account_public, decode_node_public, decode_seed, encode_account_id,
    encode_account_public, encode_node_public, encode_seed, is_valid_classic_address,
};
pub use error::{AddrFmtError, AddrFmtResult};
pub use formats::{AccountId, PublicKey, SeedEntropy, SeedType};
pub use xaddress::{
    MAIN_PREFIX, MAX_TAG, TEST_PREFIX, XAddress, classic_address_to_x_address, decode_x_address,
    encode_x_address, is_valid_x_address, x_address_to_classic_address,
};
