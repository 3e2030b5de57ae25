//! Payment IBAN validation use case.
//!
//! Orchestrates the domain for callers that want a result object instead of
//! an error: HTTP handlers, batch imports, form processors.

use serde::Serialize;

use crate::error::IbanError;
use crate::iban::Iban;

/// Outcome of [`ValidatePaymentIban::execute`].
///
/// On success carries the canonical IBAN, its country and the print form; on
/// failure carries the message and code of the [`IbanError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IbanCheckResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

impl IbanCheckResult {
    pub fn success(iban: &Iban) -> Self {
        Self {
            valid: true,
            iban: Some(iban.as_str().to_string()),
            country: Some(iban.country_code().to_string()),
            formatted: Some(iban.formatted()),
            error: None,
            code: None,
        }
    }

    pub fn failure(error: &IbanError) -> Self {
        Self {
            valid: false,
            iban: None,
            country: None,
            formatted: None,
            error: Some(error.to_string()),
            code: Some(error.code()),
        }
    }
}

/// Validate the IBAN attached to a payment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatePaymentIban;

impl ValidatePaymentIban {
    pub fn new() -> Self {
        Self
    }

    /// Never fails: rejections are reported inside the result.
    pub fn execute(&self, raw_iban: &str) -> IbanCheckResult {
        match Iban::parse(raw_iban) {
            Ok(iban) => IbanCheckResult::success(&iban),
            Err(err) => IbanCheckResult::failure(&err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_iban_produces_success() {
        let result = ValidatePaymentIban::new().execute("FR76 3000 6000 0112 3456 7890 189");

        assert!(result.valid);
        assert_eq!(result.iban.as_deref(), Some("FR7630006000011234567890189"));
        assert_eq!(result.country.as_deref(), Some("FR"));
        assert_eq!(
            result.formatted.as_deref(),
            Some("FR76 3000 6000 0112 3456 7890 189")
        );
        assert!(result.error.is_none());
        assert!(result.code.is_none());
    }

    #[test]
    fn invalid_checksum_produces_failure() {
        let result = ValidatePaymentIban::new().execute("FR7630006000011234567890188");

        assert!(!result.valid);
        assert!(result.iban.is_none());
        assert_eq!(result.error.as_deref(), Some("Invalid IBAN checksum"));
        assert_eq!(result.code, Some("INVALID_CHECKSUM"));
    }

    #[test]
    fn structural_failure_keeps_its_kind() {
        let result = ValidatePaymentIban::new().execute("FR7");
        assert_eq!(result.code, Some("TOO_SHORT"));
        assert_eq!(result.error.as_deref(), Some("IBAN is too short"));
    }

    #[test]
    fn failure_serializes_without_success_fields() {
        let result = ValidatePaymentIban::new().execute("");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["valid"], false);
        assert_eq!(json["error"], "IBAN cannot be empty");
        assert_eq!(json["code"], "EMPTY_INPUT");
        assert!(json.get("iban").is_none());
        assert!(json.get("formatted").is_none());
    }

    #[test]
    fn success_serializes_without_error_fields() {
        let result = ValidatePaymentIban::new().execute("NL91ABNA0417164300");
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["valid"], true);
        assert_eq!(json["country"], "NL");
        assert!(json.get("error").is_none());
        assert!(json.get("code").is_none());
    }
}
