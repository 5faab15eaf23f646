//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It only holds the in-memory account directory; nothing survives a
//! restart.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::services::accounts::AccountDirectory;

#[derive(Clone, Default)]
pub struct AppState {
    pub accounts: Arc<RwLock<AccountDirectory>>,
}
