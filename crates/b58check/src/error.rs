use thiserror::Error;

/// Errors from encoding or decoding checked base-58 data.
#[derive(Debug, Error)]
pub enum B58CheckError {
    /// Payload length does not match the format's expected length.
    #[error("payload length {got} does not match expected length {expected}")]
    LengthMismatch {
        /// Length the format requires.
        expected: usize,
        /// Length actually supplied.
        got: usize,
    },

    /// Decoded data shorter than one version byte plus the checksum.
    #[error("decoded data too short ({0} bytes)")]
    TooShort(usize),

    /// Recomputed checksum does not match the trailing 4 bytes.
    #[error("checksum does not match")]
    ChecksumInvalid,

    /// A spec with multiple version alternatives must carry an expected
    /// payload length to disambiguate them.
    #[error("expected length required with multiple version alternatives")]
    ExpectedLengthRequired,

    /// Version prefix bytes match none of the configured alternatives.
    #[error("version prefix matches no configured alternative")]
    NoVersionMatch,

    /// Input contained a character outside the base-58 alphabet.
    #[error("base58: {0}")]
    Base58(#[from] bs58::decode::Error),
}

/// Wrapper result type.
pub type B58CheckResult<T> = Result<T, B58CheckError>;
