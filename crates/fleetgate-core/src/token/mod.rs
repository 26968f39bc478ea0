//! Bearer-credential handling (header extraction + claims decoding).

pub mod bearer;
pub mod claims;

pub use bearer::extract_bearer;
pub use claims::{decode_claims, Claims};
