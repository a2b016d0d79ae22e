//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`:
//! Argon2 password hashing, SeaORM/Postgres repositories, and functional
//! in-memory repositories used when no database is configured.

pub mod auth;
pub mod database;

pub use auth::Argon2PasswordService;
