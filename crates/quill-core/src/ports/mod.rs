//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod repository;

pub use auth::{HashError, PasswordService};
pub use repository::{AccountRepository, CategoryRepository, PostRepository};
