//! `Authorization` header extraction.

use crate::error::{FleetGateError, Result};

/// Pull the raw token out of an `Authorization` header value.
///
/// An absent or blank header is `MissingToken`. A present value has a literal
/// `"Bearer "` scheme prefix stripped if there is one; a value without that
/// prefix is passed through unchanged and left for claims decoding to reject.
pub fn extract_bearer(header: Option<&str>) -> Result<&str> {
    let raw = header
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(FleetGateError::MissingToken)?;

    Ok(raw.strip_prefix("Bearer ").unwrap_or(raw))
}
