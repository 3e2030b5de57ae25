use std::sync::Arc;

use ibancheck_core::ValidatePaymentIban;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is `Copy`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Payment IBAN validation use case.
    pub validate_payment_iban: ValidatePaymentIban,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            validate_payment_iban: ValidatePaymentIban::new(),
        }
    }
}
