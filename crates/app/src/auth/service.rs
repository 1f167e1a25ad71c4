//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sha2::{Digest, Sha256};

use crate::auth::{
    AuthScheme, AuthServiceError, Principal, Secret, TokenSettings, token::verify_token,
};

/// The single user allowed to authenticate with HTTP Basic.
#[derive(Debug, Clone)]
pub struct BasicUser {
    pub username: String,
    pub password: Secret,
}

/// Authenticates against one configured user and HS256 bearer tokens.
#[derive(Debug, Clone)]
pub struct ConfiguredAuthService {
    username_digest: [u8; 32],
    password_digest: [u8; 32],
    username: String,
    tokens: TokenSettings,
}

impl ConfiguredAuthService {
    #[must_use]
    pub fn new(user: &BasicUser, tokens: TokenSettings) -> Self {
        Self {
            username_digest: digest(&user.username),
            password_digest: digest(user.password.expose()),
            username: user.username.clone(),
            tokens,
        }
    }
}

fn digest(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

#[async_trait]
impl AuthService for ConfiguredAuthService {
    async fn authenticate_basic(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Principal, AuthServiceError> {
        let username_matches = digest(username) == self.username_digest;
        let password_matches = digest(password) == self.password_digest;

        if !(username_matches && password_matches) {
            return Err(AuthServiceError::InvalidCredentials);
        }

        Ok(Principal {
            subject: self.username.clone(),
            scheme: AuthScheme::Basic,
        })
    }

    async fn authenticate_bearer(&self, token: &str) -> Result<Principal, AuthServiceError> {
        let claims = verify_token(&self.tokens, token)?;

        Ok(Principal {
            subject: claims.sub,
            scheme: AuthScheme::Bearer,
        })
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check a Basic user name and password.
    async fn authenticate_basic(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Principal, AuthServiceError>;

    /// Check a bearer token.
    async fn authenticate_bearer(&self, token: &str) -> Result<Principal, AuthServiceError>;
}
