//! Service layer for the posts API.
//! - `posts` owns the in-memory store and the request-shaped inputs it accepts.
//! - `errors` holds the error taxonomy shared with the HTTP layer.

pub mod errors;
pub mod posts;
