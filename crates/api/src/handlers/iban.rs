//! Handlers for the `/iban` resource.

use axum::extract::Path;
use axum::Json;
use ibancheck_core::Iban;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;

/// Every accessor of a validated IBAN.
#[derive(Debug, Serialize)]
pub struct IbanDetails {
    pub iban: Iban,
    pub country_code: String,
    pub check_digits: String,
    pub bban: String,
    pub formatted: String,
}

impl From<Iban> for IbanDetails {
    fn from(iban: Iban) -> Self {
        Self {
            country_code: iban.country_code().to_string(),
            check_digits: iban.check_digits().to_string(),
            bban: iban.bban().to_string(),
            formatted: iban.formatted(),
            iban,
        }
    }
}

/// GET /api/v1/iban/{iban}
///
/// Decompose an IBAN into its parts. Spaces may be sent percent-encoded.
/// Rejections map to 400 with the domain error code.
pub async fn get_iban(Path(raw): Path<String>) -> AppResult<Json<DataResponse<IbanDetails>>> {
    let iban = Iban::parse(&raw)?;
    Ok(Json(DataResponse { data: iban.into() }))
}
