use std::time::Duration;

use jiff::Timestamp;
use taproom_app::auth::{Secret, TokenSettings, issue_token};

#[derive(Debug, clap::Args)]
pub(crate) struct CreateTokenArgs {
    /// Subject (`sub` claim) the token identifies
    #[arg(long)]
    subject: String,

    /// Lifetime of the token in seconds
    #[arg(long, default_value_t = 3600)]
    ttl_seconds: u64,

    /// HS256 signing secret shared with the API server
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    jwt_secret: String,

    /// Issuer (`iss` claim) the API server expects
    #[arg(long, env = "JWT_ISSUER", default_value = "taproom")]
    jwt_issuer: String,
}

pub(crate) fn run(args: &CreateTokenArgs) -> Result<(), String> {
    if args.subject.trim().is_empty() {
        return Err("subject cannot be empty".to_string());
    }

    if args.ttl_seconds == 0 {
        return Err("ttl-seconds must be greater than zero".to_string());
    }

    let settings = TokenSettings::new(Secret::new(args.jwt_secret.as_str()), &args.jwt_issuer);
    let ttl = Duration::from_secs(args.ttl_seconds);

    let token = issue_token(&settings, &args.subject, ttl)
        .map_err(|error| format!("failed to create token: {error}"))?;

    let expires_at = i64::try_from(args.ttl_seconds)
        .ok()
        .and_then(|ttl| Timestamp::now().checked_add(jiff::SignedDuration::from_secs(ttl)).ok());

    println!("subject: {}", args.subject);
    if let Some(expires_at) = expires_at {
        println!("token_expires_at: {expires_at}");
    }
    println!("bearer_token: {token}");

    Ok(())
}
