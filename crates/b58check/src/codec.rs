//! Checked base-58 encode/decode over a configurable alphabet.

use sha2::{Digest, Sha256};

use crate::error::{B58CheckError, B58CheckResult};
use crate::version::{Decoded, VersionSpec};

/// Length of the trailing checksum in bytes.
pub const CHECKSUM_LEN: usize = 4;

/// Minimum decoded length of checked data: one version byte plus the
/// checksum.
const MIN_CHECKED_LEN: usize = 1 + CHECKSUM_LEN;

/// Codec for one base-58 alphabet.
///
/// Holds no mutable state; a `const` instance can be shared freely across
/// threads.
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    alphabet: &'static bs58::Alphabet,
}

impl Codec {
    /// Constructs a new codec over the given alphabet.
    pub const fn new(alphabet: &'static bs58::Alphabet) -> Self {
        Self { alphabet }
    }

    /// Encodes a payload under the given version prefixes.
    ///
    /// Version sequences are laid out so that `versions[0]` forms the
    /// leftmost prefix bytes. Fails with [`B58CheckError::LengthMismatch`]
    /// unless the payload is exactly `expected_len` bytes.
    pub fn encode_versioned(
        &self,
        payload: &[u8],
        versions: &[&[u8]],
        expected_len: usize,
    ) -> B58CheckResult<String> {
        if payload.len() != expected_len {
            return Err(B58CheckError::LengthMismatch {
                expected: expected_len,
                got: payload.len(),
            });
        }

        let version_len: usize = versions.iter().map(|v| v.len()).sum();
        let mut buf = Vec::with_capacity(version_len + payload.len());
        for version in versions {
            buf.extend_from_slice(version);
        }
        buf.extend_from_slice(payload);

        Ok(self.encode_checked(&buf))
    }

    /// Appends the 4-byte double-SHA-256 checksum and encodes the result.
    pub fn encode_checked(&self, bytes: &[u8]) -> String {
        let mut buf = Vec::with_capacity(bytes.len() + CHECKSUM_LEN);
        buf.extend_from_slice(bytes);
        buf.extend_from_slice(&checksum4(bytes));
        self.encode_raw(&buf)
    }

    /// Encodes raw bytes with no versioning or checksum.
    pub fn encode_raw(&self, bytes: &[u8]) -> String {
        bs58::encode(bytes)
            .with_alphabet(self.alphabet)
            .into_string()
    }

    /// Decodes raw bytes with no checksum validation.
    ///
    /// Characters outside the alphabet surface as
    /// [`B58CheckError::Base58`].
    pub fn decode_raw(&self, s: &str) -> B58CheckResult<Vec<u8>> {
        Ok(bs58::decode(s).with_alphabet(self.alphabet).into_vec()?)
    }

    /// Decodes a checked string, validating and stripping the trailing
    /// checksum.
    pub fn decode_check(&self, s: &str) -> B58CheckResult<Vec<u8>> {
        let mut buf = self.decode_raw(s)?;

        if buf.len() < MIN_CHECKED_LEN {
            return Err(B58CheckError::TooShort(buf.len()));
        }
        if !verify_checksum(&buf) {
            return Err(B58CheckError::ChecksumInvalid);
        }

        buf.truncate(buf.len() - CHECKSUM_LEN);
        Ok(buf)
    }

    /// Decodes a checked string and matches its version prefix against a
    /// [`VersionSpec`].
    ///
    /// When the spec carries no fixed payload length, the length is guessed
    /// from the byte length of the first alternative. Every built-in format
    /// supplies an explicit length, so the guess path is only reachable
    /// through caller-constructed specs.
    pub fn decode(&self, s: &str, spec: &VersionSpec) -> B58CheckResult<Decoded> {
        let decoded = self.decode_check(s)?;

        let alternatives = spec.alternatives();
        if alternatives.len() > 1 && spec.payload_len().is_none() {
            return Err(B58CheckError::ExpectedLengthRequired);
        }

        let version_len_guess = alternatives[0].bytes().len();
        let payload_len = spec
            .payload_len()
            .unwrap_or_else(|| decoded.len().saturating_sub(version_len_guess));

        // Split from the end: the last payload_len bytes are the payload,
        // whatever precedes them is the version prefix.
        let split = decoded
            .len()
            .checked_sub(payload_len)
            .ok_or(B58CheckError::NoVersionMatch)?;
        let (version_bytes, payload) = decoded.split_at(split);

        for alt in alternatives {
            if alt.bytes() == version_bytes {
                return Ok(Decoded::new(alt.bytes(), alt.label(), payload.to_vec()));
            }
        }

        Err(B58CheckError::NoVersionMatch)
    }
}

/// Checks that the trailing [`CHECKSUM_LEN`] bytes are the double-SHA-256
/// checksum of everything before them.
pub fn verify_checksum(bytes: &[u8]) -> bool {
    if bytes.len() < CHECKSUM_LEN {
        return false;
    }

    let (body, check) = bytes.split_at(bytes.len() - CHECKSUM_LEN);
    checksum4(body).as_slice() == check
}

fn checksum4(bytes: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = Sha256::digest(Sha256::digest(bytes));
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

#[cfg(test)]
mod tests {
    use crate::version::VersionAlt;

    use super::*;

    const CODEC: Codec = Codec::new(bs58::Alphabet::RIPPLE);

    const SINGLE: VersionSpec =
        VersionSpec::new(&[VersionAlt::new(&[0x00], None)], Some(20));

    const MULTI: VersionSpec = VersionSpec::new(
        &[
            VersionAlt::new(&[0x01, 0xE1, 0x4B], Some("ed25519")),
            VersionAlt::new(&[0x21], Some("secp256k1")),
        ],
        Some(16),
    );

    const MULTI_NO_LEN: VersionSpec = VersionSpec::new(
        &[
            VersionAlt::new(&[0x01, 0xE1, 0x4B], Some("ed25519")),
            VersionAlt::new(&[0x21], Some("secp256k1")),
        ],
        None,
    );

    #[test]
    fn roundtrip_single_version() {
        let payload = [0xABu8; 20];
        let encoded = CODEC
            .encode_versioned(&payload, &[&[0x00]], 20)
            .expect("test: encode");

        let decoded = CODEC.decode(&encoded, &SINGLE).expect("test: decode");
        assert_eq!(decoded.version(), &[0x00]);
        assert_eq!(decoded.payload(), payload);
        assert_eq!(decoded.label(), None);
    }

    #[test]
    fn roundtrip_multibyte_version() {
        let payload = [0x5Au8; 16];
        let encoded = CODEC
            .encode_versioned(&payload, &[&[0x01, 0xE1, 0x4B]], 16)
            .expect("test: encode");

        let decoded = CODEC.decode(&encoded, &MULTI).expect("test: decode");
        assert_eq!(decoded.version(), &[0x01, 0xE1, 0x4B]);
        assert_eq!(decoded.label(), Some("ed25519"));
        assert_eq!(decoded.into_payload(), payload);
    }

    #[test]
    fn encode_versioned_rejects_wrong_length() {
        let err = CODEC
            .encode_versioned(&[0u8; 19], &[&[0x00]], 20)
            .unwrap_err();
        assert!(matches!(
            err,
            B58CheckError::LengthMismatch {
                expected: 20,
                got: 19
            }
        ));
    }

    #[test]
    fn decode_requires_expected_length_for_multiple_versions() {
        let payload = [0u8; 16];
        let encoded = CODEC
            .encode_versioned(&payload, &[&[0x21]], 16)
            .expect("test: encode");

        let err = CODEC.decode(&encoded, &MULTI_NO_LEN).unwrap_err();
        assert!(matches!(err, B58CheckError::ExpectedLengthRequired));
    }

    #[test]
    fn decode_unknown_version_fails() {
        let payload = [0u8; 20];
        let encoded = CODEC
            .encode_versioned(&payload, &[&[0x07]], 20)
            .expect("test: encode");

        let err = CODEC.decode(&encoded, &SINGLE).unwrap_err();
        assert!(matches!(err, B58CheckError::NoVersionMatch));
    }

    #[test]
    fn decode_check_rejects_short_input() {
        // 4 bytes total: checksum alone, no room for a version byte.
        let encoded = CODEC.encode_raw(&[1, 2, 3, 4]);
        let err = CODEC.decode_check(&encoded).unwrap_err();
        assert!(matches!(err, B58CheckError::TooShort(4)));
    }

    #[test]
    fn decode_check_rejects_bad_checksum() {
        let mut buf = vec![0x00];
        buf.extend_from_slice(&[0x11u8; 20]);
        buf.extend_from_slice(&[0u8; CHECKSUM_LEN]); // wrong checksum
        let encoded = CODEC.encode_raw(&buf);

        let err = CODEC.decode_check(&encoded).unwrap_err();
        assert!(matches!(err, B58CheckError::ChecksumInvalid));
    }

    #[test]
    fn decode_raw_rejects_foreign_characters() {
        // '0', 'O', 'I' and 'l' are outside every base-58 alphabet.
        let err = CODEC.decode_raw("r0OIl").unwrap_err();
        assert!(matches!(err, B58CheckError::Base58(_)));
    }

    #[test]
    fn corrupting_one_character_never_decodes() {
        let payload = [0xC4u8; 20];
        let encoded = CODEC
            .encode_versioned(&payload, &[&[0x00]], 20)
            .expect("test: encode");

        // Replace each character in turn with a different alphabet char and
        // make sure decoding never silently succeeds with a wrong payload.
        for i in 0..encoded.len() {
            let mut chars: Vec<char> = encoded.chars().collect();
            let replacement = if chars[i] == 'r' { 'p' } else { 'r' };
            chars[i] = replacement;
            let corrupted: String = chars.into_iter().collect();

            match CODEC.decode_check(&corrupted) {
                Err(_) => {}
                Ok(bytes) => panic!("test: corrupted input decoded to {bytes:?}"),
            }
        }
    }

    #[test]
    fn verify_checksum_is_pure() {
        let body = [0x42u8; 10];
        let mut buf = body.to_vec();
        buf.extend_from_slice(&checksum4(&body));

        assert!(verify_checksum(&buf));
        buf[0] ^= 0x01;
        assert!(!verify_checksum(&buf));
        assert!(!verify_checksum(&[0u8; 3]));
    }

    #[test]
    fn payload_length_guess_from_first_alternative() {
        // No expected length with a single alternative: payload length is
        // decoded length minus the first alternative's byte length.
        const GUESSED: VersionSpec =
            VersionSpec::new(&[VersionAlt::new(&[0x1C], None)], None);

        let payload = [0x33u8; 33];
        let encoded = CODEC
            .encode_versioned(&payload, &[&[0x1C]], 33)
            .expect("test: encode");

        let decoded = CODEC.decode(&encoded, &GUESSED).expect("test: decode");
        assert_eq!(decoded.payload(), payload);
    }
}
