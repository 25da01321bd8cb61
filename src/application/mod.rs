//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers:
//!
//! - [`services::link_service::LinkService`] - Link registry: creation,
//!   lookup, listing, deletion
//! - [`services::redirect_service::RedirectService`] - Redirect resolution
//!   and fire-and-forget click dispatch

pub mod services;
