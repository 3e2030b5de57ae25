//! Shared response envelope types for API handlers.
//!
//! Resource lookups use a `{ "data": ... }` envelope. The payment validation
//! endpoint keeps its flat `{ "valid": ... }` shape because clients branch on
//! `valid` directly.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: details }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
