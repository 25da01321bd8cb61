//! Original-URL validation.
//!
//! Accepted URLs are stored verbatim; validation never rewrites them, so the
//! redirect target is byte-for-byte what the creator submitted.

use serde_json::json;
use url::Url;

use crate::error::AppError;

/// Validates that `raw` is an absolute `http` or `https` URL.
///
/// # Errors
///
/// Returns [`AppError::Validation`] when the string does not parse as an
/// absolute URL or carries any other scheme.
pub fn validate_original_url(raw: &str) -> Result<(), AppError> {
    let parsed = Url::parse(raw).map_err(|e| {
        AppError::bad_request(
            "originalUrl must be an absolute http(s) URL",
            json!({ "reason": e.to_string() }),
        )
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(AppError::bad_request(
            "originalUrl scheme must be http or https",
            json!({ "scheme": scheme }),
        )),
    }
}
