//! Utility functions shared across the application:
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_validator`] - Original-URL validation
//! - [`user_agent`] - Device/browser/OS derivation from User-Agent strings

pub mod code_generator;
pub mod url_validator;
pub mod user_agent;
