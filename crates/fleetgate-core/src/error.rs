//! Shared error type across fleetgate crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// No usable bearer credential on a protected path.
    Unauthorized,
    /// Credential present but unparseable or malformed.
    InvalidToken,
    /// Credential valid but role insufficient for the path.
    Forbidden,
    /// Invalid input / malformed configuration.
    BadRequest,
    /// Unsupported config schema version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::Unauthorized => "UNAUTHORIZED",
            ClientCode::InvalidToken => "INVALID_TOKEN",
            ClientCode::Forbidden => "FORBIDDEN",
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }

    /// HTTP status carried by a terminal response for this code.
    pub fn http_status(self) -> u16 {
        match self {
            ClientCode::Unauthorized | ClientCode::InvalidToken => 401,
            ClientCode::Forbidden => 403,
            ClientCode::BadRequest | ClientCode::UnsupportedVersion => 400,
            ClientCode::Internal => 500,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, FleetGateError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum FleetGateError {
    #[error("missing bearer token")]
    MissingToken,
    #[error("invalid token")]
    InvalidToken,
    #[error("forbidden")]
    Forbidden,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl FleetGateError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            FleetGateError::MissingToken => ClientCode::Unauthorized,
            FleetGateError::InvalidToken => ClientCode::InvalidToken,
            FleetGateError::Forbidden => ClientCode::Forbidden,
            FleetGateError::BadRequest(_) => ClientCode::BadRequest,
            FleetGateError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            FleetGateError::Internal(_) => ClientCode::Internal,
        }
    }
}
