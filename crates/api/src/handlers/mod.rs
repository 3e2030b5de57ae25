pub mod iban;
pub mod payment;
