//! The validated IBAN value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checksum;
use crate::error::IbanError;
use crate::normalize::normalize;

/// An IBAN that has passed normalization, structure checks and MOD 97-10.
///
/// The only way to obtain one is through [`Iban::parse`] (or the `FromStr`,
/// `TryFrom` and `Deserialize` impls that delegate to it), so holding an
/// `Iban` is proof of validity. The canonical form is never modified after
/// construction. Equality and hashing use the canonical form, so
/// `"fr76 3000 …"` and `"FR763000…"` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iban {
    canonical: String,
}

impl Iban {
    /// Normalize and validate `raw`.
    ///
    /// # Errors
    ///
    /// Structural problems are returned as-is; a well-formed value whose
    /// checksum does not hold yields [`IbanError::InvalidChecksum`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ibancheck_core::Iban;
    ///
    /// let iban = Iban::parse("fr76 3000 6000 0112 3456 7890 189").unwrap();
    /// assert_eq!(iban.as_str(), "FR7630006000011234567890189");
    /// assert_eq!(iban.country_code(), "FR");
    /// ```
    pub fn parse(raw: &str) -> Result<Self, IbanError> {
        let canonical = normalize(raw);

        if !checksum::validate(&canonical)? {
            return Err(IbanError::InvalidChecksum);
        }

        Ok(Self { canonical })
    }

    /// Canonical form: upper-case, no spaces.
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// ISO 3166-1 alpha-2 country code (characters 1-2).
    pub fn country_code(&self) -> &str {
        &self.canonical[..2]
    }

    /// The two check digits (characters 3-4).
    pub fn check_digits(&self) -> &str {
        &self.canonical[2..4]
    }

    /// Basic Bank Account Number: everything after the check digits.
    pub fn bban(&self) -> &str {
        &self.canonical[4..]
    }

    /// Print form: groups of four separated by single spaces.
    ///
    /// `FR7630006000011234567890189` becomes
    /// `FR76 3000 6000 0112 3456 7890 189`.
    pub fn formatted(&self) -> String {
        let mut out = String::with_capacity(self.canonical.len() + self.canonical.len() / 4);
        for (i, c) in self.canonical.chars().enumerate() {
            if i > 0 && i % 4 == 0 {
                out.push(' ');
            }
            out.push(c);
        }
        out
    }

    pub fn into_string(self) -> String {
        self.canonical
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl AsRef<str> for Iban {
    fn as_ref(&self) -> &str {
        &self.canonical
    }
}

impl FromStr for Iban {
    type Err = IbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Iban {
    type Error = IbanError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Iban {
    type Error = IbanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Iban> for String {
    fn from(iban: Iban) -> Self {
        iban.canonical
    }
}
