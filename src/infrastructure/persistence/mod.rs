//! PostgreSQL repository implementations.
//!
//! Queries are runtime-bound prepared statements mapped through row structs,
//! so the crate builds without a reachable database.
//!
//! # Repositories
//!
//! - [`PgLinkRepository`] - Link storage, listing, and atomic resolution
//! - [`PgClickRepository`] - Click event storage and retrieval

pub mod pg_click_repository;
pub mod pg_link_repository;

pub use pg_click_repository::PgClickRepository;
pub use pg_link_repository::PgLinkRepository;
