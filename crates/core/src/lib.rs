//! IBAN domain logic: normalization, ISO 7064 MOD 97-10 checksum and the
//! validated [`Iban`] value type, plus the thin use case and `validator`
//! adapter built on top of it.
//!
//! Everything here is pure and synchronous; no I/O, no shared state.

pub mod checksum;
pub mod constraint;
pub mod error;
pub mod iban;
pub mod normalize;
pub mod payment;

pub use error::IbanError;
pub use iban::Iban;
pub use payment::{IbanCheckResult, ValidatePaymentIban};
