//! Token claims decoding.
//!
//! Tokens are three-part dot-delimited strings; only the middle segment is
//! consumed here. The segment is base64-decoded and parsed as a JSON record.
//!
//! The claims are decoded without cryptographic signature verification.
//! Callers must not treat a decoded record as proof of issuer intent.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;
use serde::Deserialize;

use crate::error::{FleetGateError, Result};

/// Claims record embedded in a token's middle segment.
/// Unknown fields are ignored; everything the gate does not consume is
/// carried by the issuer for other audiences.
#[derive(Debug, Clone, Deserialize)]
pub struct Claims {
    /// Subject (user identifier).
    #[serde(default)]
    pub sub: Option<String>,
    /// Role name, e.g. `"admin"`.
    #[serde(default)]
    pub role: Option<String>,
    /// Expiry as Unix seconds, if the issuer set one.
    #[serde(default)]
    pub exp: Option<u64>,
}

/// Decode the claims record from a dot-delimited token.
///
/// Fails with `InvalidToken` when the token has fewer than two segments, the
/// middle segment is not valid base64, or the decoded bytes are not a JSON
/// record.
pub fn decode_claims(token: &str) -> Result<Claims> {
    let mut segments = token.split('.');
    let _header = segments.next();
    let payload = segments.next().ok_or(FleetGateError::InvalidToken)?;

    let bytes = decode_segment(payload)?;
    serde_json::from_slice(&bytes).map_err(|_| FleetGateError::InvalidToken)
}

/// Issuers conventionally emit unpadded base64url; some emit the standard
/// alphabet with padding. Accept both.
fn decode_segment(segment: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .or_else(|_| STANDARD.decode(segment))
        .map_err(|_| FleetGateError::InvalidToken)
}
