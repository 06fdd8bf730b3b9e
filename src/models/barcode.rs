use std::time::Instant;

/// Barcode symbology that a decoded string matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbology {
    /// 13-digit retail code with a weighted-sum check digit.
    Ean13,
    /// 8-digit short-form retail code.
    Ean8,
    /// 12-digit North American retail code.
    UpcA,
    /// Permissive match: printable ASCII of plausible length, no
    /// structural check. Covers Code128 and Code39 payloads.
    Code128OrCode39,
}

impl Symbology {
    /// Whether this symbology carries a verifiable check digit.
    pub fn is_checksummed(&self) -> bool {
        !matches!(self, Symbology::Code128OrCode39)
    }

    /// Human-readable symbology name.
    pub fn name(&self) -> &'static str {
        match self {
            Symbology::Ean13 => "EAN-13",
            Symbology::Ean8 => "EAN-8",
            Symbology::UpcA => "UPC-A",
            Symbology::Code128OrCode39 => "Code128/Code39",
        }
    }
}

/// A raw string produced by a single decode attempt.
///
/// Candidates are transient: each one is validated immediately and dropped
/// if it fails. Only the first valid candidate of a session survives, as a
/// [`ValidatedBarcode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedCandidate {
    /// Decoded payload as reported by the decode library.
    pub raw: String,
    /// When the decode attempt produced this string.
    pub at: Instant,
}

impl DecodedCandidate {
    /// Wrap a decoded string, timestamped now.
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            at: Instant::now(),
        }
    }
}

/// A candidate whose content passed one of the recognized symbology checks.
///
/// This is the terminal output of a scan session; at most one is emitted per
/// session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBarcode {
    /// The validated payload, handed to the caller verbatim.
    pub payload: String,
    /// Which symbology check the payload matched.
    pub symbology: Symbology,
    /// When the winning decode attempt happened.
    pub at: Instant,
}
