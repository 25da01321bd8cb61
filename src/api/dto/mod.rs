//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde with camelCase field names on the wire and validator
//! for input validation.

pub mod health;
pub mod links;
pub mod pagination;
pub mod stats;
