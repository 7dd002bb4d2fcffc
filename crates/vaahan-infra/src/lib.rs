//! # Vaahan Infrastructure
//!
//! Concrete implementations of the ports defined in `vaahan-core`.
//! Currently a single session-store backend; the port keeps the services
//! decoupled from it so tests can swap in fakes.

pub mod session;

pub use session::InMemorySessionStore;
