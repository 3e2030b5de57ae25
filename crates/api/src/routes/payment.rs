//! Route definitions for the `/payment` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::payment;
use crate::state::AppState;

/// Routes mounted at `/payment`.
///
/// ```text
/// POST   /validate-iban  -> validate_iban
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/validate-iban", post(payment::validate_iban))
}
