//! Short code generation and validation.
//!
//! Generated codes are uniform random draws over the 62-symbol alphanumeric
//! alphabet. Custom codes must match the same alphabet at 6-8 characters.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;
use serde_json::json;

use crate::error::AppError;

/// The 62-symbol alphabet codes are drawn from.
pub const CODE_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Code lengths tried in order when allocating a generated code.
///
/// Generation starts at 6 characters (62^6 ≈ 56 billion combinations) and
/// escalates only after repeated collisions.
pub const CODE_LENGTHS: [usize; 3] = [6, 7, 8];

/// Insert attempts per code length before escalating to the next length.
pub const ATTEMPTS_PER_LENGTH: usize = 3;

static CODE_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").expect("code format regex is valid"));

/// Generates a random alphanumeric code of the given length.
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}

/// Validates a user-provided custom short code.
///
/// # Errors
///
/// Returns [`AppError::Validation`] unless the code is 6-8 alphanumeric
/// characters.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if CODE_FORMAT.is_match(code) {
        Ok(())
    } else {
        Err(AppError::bad_request(
            "Short code must be 6-8 alphanumeric characters",
            json!({ "shortCode": code }),
        ))
    }
}
