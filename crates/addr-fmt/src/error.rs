use thiserror::Error;
use xrpl_b58check::B58CheckError;

/// Errors for decoding and encoding address formats.
#[derive(Debug, Error)]
pub enum AddrFmtError {
    /// X-Address network prefix is neither mainnet nor testnet.
    #[error("x-address prefix not recognized (found {0:?})")]
    InvalidPrefix([u8; 2]),

    /// X-Address flag byte has a reserved value (>= 2).
    #[error("unsupported x-address flag byte {0}")]
    UnsupportedXAddress(u8),

    /// X-Address has no tag but its reserved bytes are not all zero.
    #[error("x-address reserved bytes are not zero")]
    ReservedBytesNonZero,

    /// Destination tag does not fit in 32 bits.
    #[error("destination tag {0} out of 32-bit range")]
    InvalidTag(u64),

    /// Underlying checked base-58 failure.
    #[error("codec: {0}")]
    Codec(#[from] B58CheckError),
}

/// Wrapper result type.
pub type AddrFmtResult<T> = Result<T, AddrFmtError>;
