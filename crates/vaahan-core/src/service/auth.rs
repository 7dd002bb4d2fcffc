//! Authentication state service.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{AuthState, Credentials};
use crate::error::DomainError;
use crate::ports::SessionStore;

/// Session-store key holding the serialized [`AuthState`].
pub const AUTH_STATE_KEY: &str = "auth_state";

/// Owner of the authentication state.
///
/// The only guarantee is "reflects the last locally-issued login/logout
/// call" - no remote verification happens anywhere.
pub struct AuthService {
    state: RwLock<AuthState>,
    store: Arc<dyn SessionStore>,
}

impl AuthService {
    /// Load the persisted auth state, falling back to logged-out when the
    /// record is absent, unreadable, or violates the state invariant.
    pub async fn load(store: Arc<dyn SessionStore>) -> Self {
        let state = match store.get(AUTH_STATE_KEY).await {
            Some(raw) => match serde_json::from_str::<AuthState>(&raw) {
                Ok(state) if state.is_consistent() => state,
                Ok(_) => {
                    tracing::warn!("Persisted auth state is inconsistent, starting logged out");
                    AuthState::logged_out()
                }
                Err(err) => {
                    tracing::warn!(
                        "Persisted auth state is unreadable, starting logged out: {err}"
                    );
                    AuthState::logged_out()
                }
            },
            None => AuthState::logged_out(),
        };

        Self {
            state: RwLock::new(state),
            store,
        }
    }

    /// Transition to logged-in and persist the new state.
    ///
    /// Accepts any credential pair unconditionally; shape validation happens
    /// at the form boundary before this is called.
    pub async fn login(&self, credentials: Credentials) -> Result<(), DomainError> {
        let next = AuthState::logged_in(credentials);
        let encoded = serde_json::to_string(&next)?;

        *self.state.write().await = next;
        self.store.set(AUTH_STATE_KEY, &encoded).await?;

        tracing::debug!("Logged in");
        Ok(())
    }

    /// Transition to logged-out and remove the persisted record entirely,
    /// not merely write a logged-out value.
    pub async fn logout(&self) -> Result<(), DomainError> {
        *self.state.write().await = AuthState::logged_out();
        self.store.remove(AUTH_STATE_KEY).await?;

        tracing::debug!("Logged out");
        Ok(())
    }

    /// Snapshot of the current state.
    pub async fn snapshot(&self) -> AuthState {
        self.state.read().await.clone()
    }

    /// Whether a user is currently logged in.
    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::tests::FakeStore;

    fn credentials() -> Credentials {
        Credentials {
            email: "admin@parkvaahan.in".to_string(),
            password: "hunter2!".to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_then_snapshot() {
        let store = FakeStore::new();
        let auth = AuthService::load(store.clone()).await;
        assert!(!auth.is_authenticated().await);

        auth.login(credentials()).await.unwrap();

        let state = auth.snapshot().await;
        assert!(state.is_authenticated);
        assert_eq!(state.user, Some(credentials()));
        assert!(store.raw(AUTH_STATE_KEY).is_some());
    }

    #[tokio::test]
    async fn test_logout_removes_persisted_record() {
        let store = FakeStore::new();
        let auth = AuthService::load(store.clone()).await;
        auth.login(credentials()).await.unwrap();

        auth.logout().await.unwrap();

        let state = auth.snapshot().await;
        assert!(!state.is_authenticated);
        assert_eq!(state.user, None);
        assert_eq!(store.raw(AUTH_STATE_KEY), None);
    }

    #[tokio::test]
    async fn test_persisted_state_is_restored() {
        let store = FakeStore::new();
        AuthService::load(store.clone())
            .await
            .login(credentials())
            .await
            .unwrap();

        let restored = AuthService::load(store).await;
        assert!(restored.is_authenticated().await);
        assert_eq!(restored.snapshot().await.user, Some(credentials()));
    }

    #[tokio::test]
    async fn test_corrupt_state_falls_back_to_logged_out() {
        let store = FakeStore::preloaded(AUTH_STATE_KEY, "{not json");
        let auth = AuthService::load(store).await;
        assert!(!auth.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_inconsistent_state_falls_back_to_logged_out() {
        let store = FakeStore::preloaded(AUTH_STATE_KEY, r#"{"is_authenticated":true,"user":null}"#);
        let auth = AuthService::load(store).await;
        assert!(!auth.is_authenticated().await);
    }
}
