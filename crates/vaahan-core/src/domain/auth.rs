use serde::{Deserialize, Serialize};

/// Login credentials captured by the view layer.
///
/// Ephemeral: never hashed, never verified against a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Authentication state mirrored to the session store.
///
/// Invariant: `is_authenticated` is true exactly when `user` is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<Credentials>,
}

impl AuthState {
    /// The initial state: no user, not authenticated.
    pub fn logged_out() -> Self {
        Self {
            is_authenticated: false,
            user: None,
        }
    }

    /// The state after a locally-issued login.
    pub fn logged_in(user: Credentials) -> Self {
        Self {
            is_authenticated: true,
            user: Some(user),
        }
    }

    /// Whether the state upholds the `is_authenticated` <-> `user` invariant.
    pub fn is_consistent(&self) -> bool {
        self.is_authenticated == self.user.is_some()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::logged_out()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logged_in_upholds_invariant() {
        let state = AuthState::logged_in(Credentials {
            email: "admin@example.com".to_string(),
            password: "secret".to_string(),
        });
        assert!(state.is_authenticated);
        assert!(state.is_consistent());

        assert!(AuthState::logged_out().is_consistent());
    }

    #[test]
    fn test_inconsistent_state_detected() {
        let state = AuthState {
            is_authenticated: true,
            user: None,
        };
        assert!(!state.is_consistent());
    }
}
