//! ISO 13616 structure checks and the ISO 7064 MOD 97-10 checksum.
//!
//! Operates on already-normalized input (see [`crate::normalize`]). Format
//! violations are reported as errors before any arithmetic happens; a
//! well-formed value yields `Ok(true)` or `Ok(false)` depending on the
//! checksum alone.

use crate::error::IbanError;

/// Uniform minimum length: two country letters, two check digits and at
/// least one BBAN character. There is no per-country length table.
pub const MIN_LENGTH: usize = 5;

/// Largest group of digits folded into the running remainder at once.
///
/// With a remainder below 97 prefixed, a group never exceeds 9 digits, which
/// fits in a `u32`.
const CHUNK_DIGITS: usize = 7;

/// Check the structure of a normalized IBAN, then verify its checksum.
///
/// # Errors
///
/// - [`IbanError::EmptyInput`] for an empty string.
/// - [`IbanError::InvalidCharacters`] if anything outside `[A-Z0-9]` appears.
/// - [`IbanError::TooShort`] below [`MIN_LENGTH`] characters.
pub fn validate(normalized: &str) -> Result<bool, IbanError> {
    assert_valid_format(normalized)?;
    Ok(verify_checksum(normalized))
}

fn assert_valid_format(normalized: &str) -> Result<(), IbanError> {
    if normalized.is_empty() {
        return Err(IbanError::EmptyInput);
    }

    if !normalized
        .bytes()
        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    {
        return Err(IbanError::InvalidCharacters);
    }

    // All ASCII at this point, so byte length is character length.
    if normalized.len() < MIN_LENGTH {
        return Err(IbanError::TooShort);
    }

    Ok(())
}

fn verify_checksum(normalized: &str) -> bool {
    let (head, tail) = normalized.split_at(4);
    let mut rearranged = String::with_capacity(normalized.len());
    rearranged.push_str(tail);
    rearranged.push_str(head);

    mod97(&letters_to_digits(&rearranged)) == 1
}

/// Replace each letter with its base-36 value (`A` → `10` … `Z` → `35`).
///
/// Digits pass through unchanged. Expects `[A-Z0-9]` input.
fn letters_to_digits(value: &str) -> String {
    let mut digits = String::with_capacity(value.len() * 2);
    for b in value.bytes() {
        if b.is_ascii_uppercase() {
            let n = b - b'A' + 10;
            digits.push(char::from(b'0' + n / 10));
            digits.push(char::from(b'0' + n % 10));
        } else {
            digits.push(char::from(b));
        }
    }
    digits
}

/// Remainder of an arbitrarily long decimal digit string divided by 97.
///
/// The string is consumed in groups of at most seven digits. Each group is
/// read with the previous remainder in front of it, as if the two were
/// concatenated, and reduced mod 97 before moving on. Non-digit bytes are
/// not expected and are skipped.
///
/// # Examples
///
/// ```
/// use ibancheck_core::checksum::mod97;
///
/// assert_eq!(mod97("97"), 0);
/// assert_eq!(mod97("3214282912345698765432161182"), 1);
/// ```
pub fn mod97(digits: &str) -> u32 {
    digits
        .as_bytes()
        .chunks(CHUNK_DIGITS)
        .fold(0u32, |remainder, chunk| {
            chunk
                .iter()
                .filter(|b| b.is_ascii_digit())
                .fold(remainder, |acc, b| acc * 10 + u32::from(b - b'0'))
                % 97
        })
}
