//! Error handling for the muster backend.

pub mod domain;

pub use domain::DomainError;
