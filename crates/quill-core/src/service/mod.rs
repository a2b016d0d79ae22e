//! Domain services - the ownership-and-consistency layer.
//!
//! Everything with a real invariant lives here: the credential flow, the
//! ownership checks applied before every mutation, and the cascade that
//! keeps posts in sync with account renames and deletions.

mod accounts;
mod cascade;
mod categories;
pub mod policy;
mod posts;

pub use accounts::AccountService;
pub use cascade::Cascade;
pub use categories::CategoryService;
pub use posts::PostService;
