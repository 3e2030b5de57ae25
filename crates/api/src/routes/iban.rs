//! Route definitions for the `/iban` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::iban;
use crate::state::AppState;

/// Routes mounted at `/iban`.
///
/// ```text
/// GET    /{iban}         -> get_iban
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{iban}", get(iban::get_iban))
}
