pub mod health;
pub mod iban;
pub mod payment;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /payment/validate-iban                           validate a payment IBAN (POST)
///
/// /iban/{iban}                                     decompose a valid IBAN (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/payment", payment::router())
        .nest("/iban", iban::router())
}
