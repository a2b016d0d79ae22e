//! Database adapters and connection management.

mod connections;
pub mod entity;
pub mod memory;
pub mod postgres;

pub use connections::{DatabaseConfig, connect};
pub use memory::{InMemoryAccountRepository, InMemoryCategoryRepository, InMemoryPostRepository};
pub use postgres::{PostgresAccountRepository, PostgresCategoryRepository, PostgresPostRepository};

#[cfg(test)]
mod tests;
