use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};

use crate::error::Result;
use crate::middleware::auth::Claims;

/// Mints a bearer token for `username` with the configured secret and lifetime.
pub fn issue_token(username: &str) -> Result<String> {
    let config = crate::config::get_config();
    issue_token_with(username, config.jwt_secret.as_bytes(), config.jwt_ttl_secs)
}

pub fn issue_token_with(username: &str, secret: &[u8], ttl_secs: u64) -> Result<String> {
    let now = Utc::now().timestamp().max(0) as usize;
    let claims = Claims {
        sub: username.to_string(),
        iat: now,
        exp: now.saturating_add(usize::try_from(ttl_secs).unwrap_or(usize::MAX)),
    };
    let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))?;
    Ok(token)
}
