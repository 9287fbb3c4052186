/**
 * Session Tokens
 *
 * Verification of the bearer tokens that identify board owners. Tokens are
 * issued elsewhere; this server only checks the HS256 signature and expiry
 * and reads the subject.
 */

use jsonwebtoken::{decode, errors::ErrorKind, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (any opaque identifier chosen by the issuer)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    #[serde(default)]
    pub iat: u64,
}

/// Verify and decode a JWT token
///
/// # Arguments
/// * `token` - JWT token string
/// * `secret` - Shared HS256 secret
///
/// # Returns
/// Decoded claims, or an error when the signature, expiry or subject is invalid
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_bytes());
    let validation = Validation::default();

    let token_data = decode::<Claims>(token, &key, &validation)?;
    if token_data.claims.sub.trim().is_empty() {
        return Err(ErrorKind::InvalidSubject.into());
    }
    Ok(token_data.claims)
}
