//! Input normalization applied before any IBAN check.
//!
//! Users paste IBANs out of documents (grouped with spaces) and type them by
//! hand (lowercase), so both are folded away here. Nothing else is touched:
//! tabs, newlines and non-ASCII characters survive and are rejected by the
//! character-set check in [`crate::checksum`].

/// Remove every ASCII space and upper-case ASCII letters.
///
/// Total and idempotent: `normalize(&normalize(s)) == normalize(s)`.
///
/// # Examples
///
/// ```
/// use ibancheck_core::normalize::normalize;
///
/// assert_eq!(normalize(" fr76 3000 6000 "), "FR7630006000");
/// assert_eq!(normalize("FR76\t3000"), "FR76\t3000");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != ' ')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
