/// Why a candidate IBAN was rejected.
///
/// The first three variants are structural and are detected before any
/// checksum arithmetic runs. All of them are deterministic functions of the
/// input, so none is worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum IbanError {
    #[error("IBAN cannot be empty")]
    EmptyInput,

    #[error("IBAN contains invalid characters")]
    InvalidCharacters,

    #[error("IBAN is too short")]
    TooShort,

    #[error("Invalid IBAN checksum")]
    InvalidChecksum,
}

impl IbanError {
    /// Stable machine-readable code, used in API error payloads.
    pub fn code(&self) -> &'static str {
        match self {
            IbanError::EmptyInput => "EMPTY_INPUT",
            IbanError::InvalidCharacters => "INVALID_CHARACTERS",
            IbanError::TooShort => "TOO_SHORT",
            IbanError::InvalidChecksum => "INVALID_CHECKSUM",
        }
    }

    /// Whether the input was malformed, as opposed to well-formed with a bad
    /// checksum.
    pub fn is_structural(&self) -> bool {
        !matches!(self, IbanError::InvalidChecksum)
    }
}
