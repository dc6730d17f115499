//! Posts: the domain entity, query options, request inputs and the store.

pub mod domain;
pub mod input;
pub mod store;

pub use domain::{seed_posts, Post, SortDirection, SortField, SortSpec};
pub use input::{NewPost, PostPatch};
pub use store::PostStore;
