//! # Vaahan Core
//!
//! The domain layer of the Park Vaahan admin dashboard.
//! This crate contains the state model with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
