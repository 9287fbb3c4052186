//! Authentication test helpers
//!
//! Tokens are issued outside this server, so tests sign their own with the
//! same secret the router under test verifies with.

use jsonwebtoken::{encode, EncodingKey, Header};
use kanban_board::backend::auth::Claims;

/// Secret shared by the test router and the tokens below
pub const TEST_SECRET: &str = "integration-test-secret";

/// Sign a token for `user_id` valid for an hour
pub fn token_for(user_id: &str) -> String {
    sign_token(user_id, chrono::Utc::now().timestamp() + 3600, TEST_SECRET)
}

/// Sign a token with an explicit expiry and secret
pub fn sign_token(user_id: &str, exp: i64, secret: &str) -> String {
    let claims = Claims {
        sub: user_id.to_string(),
        exp: exp.max(0) as u64,
        iat: chrono::Utc::now().timestamp() as u64,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign test token")
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
