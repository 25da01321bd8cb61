//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic. Creation
//! inputs are separate structs (`NewLink`, `NewClick`); the store assigns
//! identifiers and timestamps.

pub mod click;
pub mod link;

pub use click::{Click, NewClick};
pub use link::{Link, NewLink, ResolvedLink};
