//! Domain entities - the core business objects.

mod account;
mod category;
mod post;

pub use account::{Account, AccountChanges, AccountProfile};
pub use category::Category;
pub use post::{NewPost, Post, PostChanges, PostFilter};
