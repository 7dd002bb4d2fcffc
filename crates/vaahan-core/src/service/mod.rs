//! State services - the sole owners of auth and spot-collection state.
//!
//! Each service initializes from the injected session store, hands out
//! snapshots, and writes the full new state back after every change.

mod auth;
mod spots;

pub use auth::{AUTH_STATE_KEY, AuthService};
pub use spots::{PARKING_SPOTS_KEY, SpotService};
