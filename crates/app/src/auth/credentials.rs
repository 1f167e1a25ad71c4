//! HTTP Basic credential decoding.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::auth::{AuthServiceError, Secret};

/// Username and password carried by a `Basic` authorization header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: Secret,
}

/// Decode the base64 `user:password` payload of a Basic authorization header.
///
/// # Errors
///
/// Returns [`AuthServiceError::MalformedCredentials`] when the payload is not
/// base64, not UTF-8, or has no `:` separator.
pub fn decode_basic_credentials(encoded: &str) -> Result<BasicCredentials, AuthServiceError> {
    let decoded = BASE64
        .decode(encoded.trim())
        .map_err(|_| AuthServiceError::MalformedCredentials)?;

    let decoded = String::from_utf8(decoded).map_err(|_| AuthServiceError::MalformedCredentials)?;
    let decoded = Secret::from(decoded);

    let (username, password) = decoded
        .expose()
        .split_once(':')
        .ok_or(AuthServiceError::MalformedCredentials)?;

    Ok(BasicCredentials {
        username: username.to_string(),
        password: Secret::new(password),
    })
}
