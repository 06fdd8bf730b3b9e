//! Symbology validation for decoded strings
//!
//! Decode libraries report raw strings; this module decides whether a string
//! is a plausible barcode payload. Rules are checked in order and the first
//! match wins:
//!
//! 1. exactly 13 digits → EAN-13 checksum
//! 2. exactly 8 digits → EAN-8 checksum
//! 3. exactly 12 digits → UPC-A checksum
//! 4. length 4–48, printable ASCII only → Code128/Code39 (permissive)
//!
//! The ordering matters: digit-only strings of the three checksummed lengths
//! never reach the permissive branch, so a 13-digit string with a bad check
//! digit is rejected outright rather than accepted as a generic code.

use crate::models::Symbology;

/// Shortest payload the permissive branch accepts.
const GENERIC_MIN_LEN: usize = 4;
/// Longest payload the permissive branch accepts.
const GENERIC_MAX_LEN: usize = 48;

/// Check a decoded string against the recognized symbologies.
///
/// Returns the matched symbology, or `None` if the string is not a valid
/// payload. The permissive branch is byte-based (0x20–0x7E), so any
/// multi-byte UTF-8 content is rejected.
///
/// # Example
/// ```
/// use barscan::{Symbology, validate};
///
/// assert_eq!(validate("4006381333931"), Some(Symbology::Ean13));
/// assert_eq!(validate("4006381333932"), None); // bad check digit
/// assert_eq!(validate("ABC-1234"), Some(Symbology::Code128OrCode39));
/// ```
pub fn validate(raw: &str) -> Option<Symbology> {
    let bytes = raw.as_bytes();
    let all_digits = !bytes.is_empty() && bytes.iter().all(u8::is_ascii_digit);

    if all_digits && bytes.len() == 13 {
        return ean13_checksum_ok(bytes).then_some(Symbology::Ean13);
    }
    if all_digits && bytes.len() == 8 {
        return ean8_checksum_ok(bytes).then_some(Symbology::Ean8);
    }
    if all_digits && bytes.len() == 12 {
        return upca_checksum_ok(bytes).then_some(Symbology::UpcA);
    }
    if (GENERIC_MIN_LEN..=GENERIC_MAX_LEN).contains(&bytes.len()) && printable_ascii(bytes) {
        return Some(Symbology::Code128OrCode39);
    }
    None
}

/// Whether a decoded string is a valid payload of any recognized symbology.
pub fn is_valid(raw: &str) -> bool {
    validate(raw).is_some()
}

fn digit(b: u8) -> u32 {
    u32::from(b - b'0')
}

/// EAN-13: weights 1/3 alternating over the first 12 digits (weight 1 on
/// even 0-based indices), check digit = (10 - sum % 10) % 10.
fn ean13_checksum_ok(d: &[u8]) -> bool {
    let sum: u32 = d[..12]
        .iter()
        .enumerate()
        .map(|(i, &b)| digit(b) * if i % 2 == 0 { 1 } else { 3 })
        .sum();
    (10 - sum % 10) % 10 == digit(d[12])
}

/// EAN-8: same formula with the weights reversed (3 on even indices), over
/// the first 7 digits.
fn ean8_checksum_ok(d: &[u8]) -> bool {
    let sum: u32 = d[..7]
        .iter()
        .enumerate()
        .map(|(i, &b)| digit(b) * if i % 2 == 0 { 3 } else { 1 })
        .sum();
    (10 - sum % 10) % 10 == digit(d[7])
}

/// UPC-A: weight 3 on even indices over the first 11 digits.
fn upca_checksum_ok(d: &[u8]) -> bool {
    let sum: u32 = d[..11]
        .iter()
        .enumerate()
        .map(|(i, &b)| digit(b) * if i % 2 == 0 { 3 } else { 1 })
        .sum();
    (10 - sum % 10) % 10 == digit(d[11])
}

fn printable_ascii(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| (0x20..=0x7e).contains(&b))
}
