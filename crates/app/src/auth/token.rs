//! Bearer token issuing and verification.

use std::time::Duration;

use jiff::Timestamp;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::auth::{AuthServiceError, Secret};

/// Claims carried by a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signing material for HS256 bearer tokens.
#[derive(Debug, Clone)]
pub struct TokenSettings {
    pub secret: Secret,
    pub issuer: String,
}

impl TokenSettings {
    #[must_use]
    pub fn new(secret: Secret, issuer: impl Into<String>) -> Self {
        Self {
            secret,
            issuer: issuer.into(),
        }
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);

        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        validation
    }
}

/// Mint a token for `subject` that expires after `ttl`.
///
/// # Errors
///
/// Returns an error when the claims cannot be signed.
pub fn issue_token(
    settings: &TokenSettings,
    subject: &str,
    ttl: Duration,
) -> Result<String, AuthServiceError> {
    let issued_at = Timestamp::now().as_second();
    let ttl = i64::try_from(ttl.as_secs()).unwrap_or(i64::MAX);

    let claims = Claims {
        sub: subject.to_string(),
        iss: settings.issuer.clone(),
        iat: issued_at,
        exp: issued_at.saturating_add(ttl),
    };

    encode_claims(settings, &claims)
}

pub(crate) fn encode_claims(
    settings: &TokenSettings,
    claims: &Claims,
) -> Result<String, AuthServiceError> {
    let key = EncodingKey::from_secret(settings.secret.expose().as_bytes());

    Ok(encode(&Header::new(Algorithm::HS256), claims, &key)?)
}

/// Check a token's signature, issuer and expiry and return its claims.
///
/// # Errors
///
/// Returns [`AuthServiceError::Token`] for any token that fails validation.
pub fn verify_token(settings: &TokenSettings, token: &str) -> Result<Claims, AuthServiceError> {
    let key = DecodingKey::from_secret(settings.secret.expose().as_bytes());

    let data = decode::<Claims>(token, &key, &settings.validation())?;

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn settings() -> TokenSettings {
        TokenSettings::new(Secret::new("a-test-signing-secret"), "taproom")
    }

    #[test]
    fn issued_token_verifies() -> TestResult {
        let token = issue_token(&settings(), "TOPuser", Duration::from_secs(600))?;

        let claims = verify_token(&settings(), &token)?;

        assert_eq!(claims.sub, "TOPuser");
        assert_eq!(claims.iss, "taproom");
        assert_eq!(claims.exp - claims.iat, 600);

        Ok(())
    }

    #[test]
    fn expired_token_is_rejected() -> TestResult {
        let now = Timestamp::now().as_second();

        let token = encode_claims(
            &settings(),
            &Claims {
                sub: "TOPuser".to_string(),
                iss: "taproom".to_string(),
                iat: now - 7200,
                exp: now - 3600,
            },
        )?;

        assert!(matches!(
            verify_token(&settings(), &token),
            Err(AuthServiceError::Token(_))
        ));

        Ok(())
    }

    #[test]
    fn token_from_other_issuer_is_rejected() -> TestResult {
        let other = TokenSettings::new(Secret::new("a-test-signing-secret"), "elsewhere");

        let token = issue_token(&other, "TOPuser", Duration::from_secs(600))?;

        assert!(verify_token(&settings(), &token).is_err());

        Ok(())
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() -> TestResult {
        let other = TokenSettings::new(Secret::new("another-secret"), "taproom");

        let token = issue_token(&other, "TOPuser", Duration::from_secs(600))?;

        assert!(verify_token(&settings(), &token).is_err());

        Ok(())
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(verify_token(&settings(), "not.a.token").is_err());
    }
}
