//! Handlers for the `/payment` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use ibancheck_core::IbanCheckResult;
use serde::Deserialize;

use crate::error::AppResult;
use crate::state::AppState;

/// Request body for the payment IBAN validation endpoint.
///
/// A missing `iban` field is treated as an empty string and rejected as
/// `EMPTY_INPUT` by the domain.
#[derive(Debug, Deserialize)]
pub struct ValidateIbanRequest {
    #[serde(default)]
    pub iban: String,
}

/// POST /api/v1/payment/validate-iban
///
/// Body: `{ "iban": "FR76 3000 6000 0112 3456 7890 189" }`.
///
/// Returns 200 with `{ valid: true, iban, country, formatted }` for a valid
/// IBAN, 400 with `{ valid: false, error, code }` otherwise.
pub async fn validate_iban(
    State(state): State<AppState>,
    body: Result<Json<ValidateIbanRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<IbanCheckResult>)> {
    let Json(input) = body?;

    let result = state.validate_payment_iban.execute(&input.iban);

    if result.valid {
        tracing::debug!(country = ?result.country, "Payment IBAN accepted");
        Ok((StatusCode::OK, Json(result)))
    } else {
        tracing::debug!(code = ?result.code, "Payment IBAN rejected");
        Ok((StatusCode::BAD_REQUEST, Json(result)))
    }
}
