//! Version prefix specifications and the decoded result type.

/// One admissible version-byte prefix for a format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionAlt {
    /// The version bytes that prefix the payload.
    bytes: &'static [u8],

    /// Optional human-readable label for this alternative.
    label: Option<&'static str>,
}

impl VersionAlt {
    /// Constructs a new alternative. `bytes` must be non-empty.
    pub const fn new(bytes: &'static [u8], label: Option<&'static str>) -> Self {
        assert!(!bytes.is_empty(), "version: empty version bytes");
        Self { bytes, label }
    }

    /// Gets the version bytes.
    pub const fn bytes(&self) -> &'static [u8] {
        self.bytes
    }

    /// Gets the label, if one was set.
    pub const fn label(&self) -> Option<&'static str> {
        self.label
    }
}

/// Describes the version prefixes a format admits and, when fixed, the raw
/// payload length in bytes.
///
/// Decoding matches alternatives in declaration order; the first exact match
/// wins. When more than one alternative is configured, `payload_len` is
/// mandatory so the version/payload split is unambiguous.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionSpec {
    alternatives: &'static [VersionAlt],
    payload_len: Option<usize>,
}

impl VersionSpec {
    /// Constructs a new spec. `alternatives` must be non-empty.
    pub const fn new(alternatives: &'static [VersionAlt], payload_len: Option<usize>) -> Self {
        assert!(!alternatives.is_empty(), "version: no alternatives");
        Self {
            alternatives,
            payload_len,
        }
    }

    /// Gets the admissible version alternatives, in match order.
    pub const fn alternatives(&self) -> &'static [VersionAlt] {
        self.alternatives
    }

    /// Gets the fixed payload length, if the format has one.
    pub const fn payload_len(&self) -> Option<usize> {
        self.payload_len
    }
}

/// A successfully decoded payload together with the version alternative that
/// matched it.
///
/// The no-match case is a dedicated error, not a nullable result, so callers
/// cannot ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    version: &'static [u8],
    label: Option<&'static str>,
    payload: Vec<u8>,
}

impl Decoded {
    pub(crate) fn new(
        version: &'static [u8],
        label: Option<&'static str>,
        payload: Vec<u8>,
    ) -> Self {
        Self {
            version,
            label,
            payload,
        }
    }

    /// Gets the version bytes that matched.
    pub fn version(&self) -> &'static [u8] {
        self.version
    }

    /// Gets the label of the matched alternative, if it had one.
    pub fn label(&self) -> Option<&'static str> {
        self.label
    }

    /// Gets the raw payload bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Consumes the result, returning the payload bytes.
    pub fn into_payload(self) -> Vec<u8> {
        self.payload
    }
}
