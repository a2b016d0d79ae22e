//! # Quill Core
//!
//! The domain layer of the Quill content platform.
//! Pure business logic with zero infrastructure dependencies: entities,
//! ports, the ownership policy, and the account/post consistency rules.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
