//! Domain entities - the core business objects.

mod auth;

mod spot;

pub use auth::{AuthState, Credentials};
pub use spot::{Address, ParkingSpot, SpotDraft, SpotStatus};
