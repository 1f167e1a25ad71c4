//! Auth Config

use clap::Args;

/// Basic user and bearer token settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// User name accepted by HTTP Basic authentication
    #[arg(long = "auth-username", env = "AUTH_USERNAME", default_value = "TOPuser")]
    pub username: String,

    /// Password accepted by HTTP Basic authentication
    #[arg(long = "auth-password", env = "AUTH_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// HS256 secret used to verify bearer tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Expected `iss` claim of bearer tokens
    #[arg(long, env = "JWT_ISSUER", default_value = "taproom")]
    pub jwt_issuer: String,
}
