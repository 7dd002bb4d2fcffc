//! # Vaahan Shared
//!
//! Types crossing the boundary between the view layer and the state
//! services: form payloads and their shape validation.

pub mod dto;

pub use dto::{AMENITY_OPTIONS, LoginErrors, LoginForm};
