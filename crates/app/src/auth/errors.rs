//! Auth service errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("malformed basic credentials")]
    MalformedCredentials,

    #[error("token processing error")]
    Token(#[source] jsonwebtoken::errors::Error),
}

impl From<jsonwebtoken::errors::Error> for AuthServiceError {
    fn from(error: jsonwebtoken::errors::Error) -> Self {
        Self::Token(error)
    }
}
