//! SeaORM entities and conversions to/from the domain types.

pub mod account;
pub mod category;
pub mod post;
