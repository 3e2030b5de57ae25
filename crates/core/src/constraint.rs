//! `validator` crate integration.
//!
//! Lets request DTOs declare an IBAN field the same way they declare any
//! other constraint:
//!
//! ```
//! use ibancheck_core::constraint::validate_iban;
//! use validator::Validate;
//!
//! #[derive(Validate)]
//! struct PaymentForm {
//!     #[validate(custom(function = "validate_iban"))]
//!     iban: String,
//! }
//!
//! let form = PaymentForm { iban: "DE89 3704 0044 0532 0130 00".into() };
//! assert!(form.validate().is_ok());
//! ```

use std::borrow::Cow;

use validator::ValidationError;

use crate::iban::Iban;

/// Error code attached to every IBAN constraint violation.
pub const IBAN_CONSTRAINT_CODE: &str = "iban";

/// Custom validator for IBAN fields.
///
/// An empty value passes: presence is the job of `length`/`required` rules.
/// Any other value must parse as an [`Iban`].
pub fn validate_iban(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }

    Iban::parse(value).map(|_| ()).map_err(|_| {
        let mut error = ValidationError::new(IBAN_CONSTRAINT_CODE);
        error.message = Some(Cow::Owned(format!("The IBAN \"{value}\" is not valid.")));
        error.add_param(Cow::Borrowed("value"), &value);
        error
    })
}
