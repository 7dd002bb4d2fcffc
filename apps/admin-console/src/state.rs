//! Application state - the composition point owning both services.
//!
//! The console receives explicit handles from here; nothing is reachable
//! through ambient lookup.

use std::sync::Arc;

use vaahan_core::DomainError;
use vaahan_core::ports::SessionStore;
use vaahan_core::service::{AuthService, SpotService};
use vaahan_infra::InMemorySessionStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub spots: Arc<SpotService>,
}

impl AppState {
    /// Wire the session store and load both services from it.
    ///
    /// A failure here (the seed write) is fatal and propagates out of main.
    pub async fn new() -> Result<Self, DomainError> {
        let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

        let auth = Arc::new(AuthService::load(store.clone()).await);
        let spots = Arc::new(SpotService::load(store).await?);

        tracing::info!("Application state initialized");

        Ok(Self { auth, spots })
    }
}
