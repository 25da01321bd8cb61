//! Infrastructure layer for external integrations.
//!
//! Implements the repository traits defined by the domain layer against
//! PostgreSQL.

pub mod persistence;
