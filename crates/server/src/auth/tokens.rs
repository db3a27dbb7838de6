use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::sync::OnceLock;

/// Token type discriminator — prevents using a refresh token as an access token.
const TOKEN_TYPE_ACCESS: &str = "access";
const TOKEN_TYPE_REFRESH: &str = "refresh";

/// JWT claims stored in access and refresh tokens.
///
/// Deliberately role-free: authorization is resolved live from the store so
/// a promotion or demotion takes effect without re-issuing tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub email: String,
    pub exp: i64,
    pub iat: i64,
    /// Unique token identifier — keeps hashes distinct when several tokens
    /// are issued for the same user within the same second.
    pub jti: String,
    /// Token type: "access" or "refresh".
    pub typ: String,
}

/// Compute the SHA-256 hash of a raw token, hex-encoded. The raw refresh
/// token goes to the client cookie while only the hash is retained
/// server-side.
pub fn hash_token(raw_token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw_token.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn jwt_secret() -> &'static str {
    static SECRET: OnceLock<String> = OnceLock::new();
    SECRET.get_or_init(|| match std::env::var("JWT_SECRET") {
        Ok(secret) if !secret.is_empty() => secret,
        _ => {
            tracing::warn!("JWT_SECRET not set — generating a per-process secret");
            let bytes: [u8; 32] = rand::random();
            hex::encode(bytes)
        }
    })
}

pub fn create_access_token(
    user_id: i64,
    email: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let minutes = crate::config::config().session.access_token_minutes;
    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::minutes(minutes)).timestamp(),
        jti: uuid::Uuid::new_v4().to_string(),
        typ: TOKEN_TYPE_ACCESS.to_string(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret().as_bytes()),
    )
}

pub fn create_refresh_token(
    user_id: i64,
    email: &str,
) -> Result<(String, DateTime<Utc>), jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let days = crate::config::config().session.refresh_token_days;
    let expires_at = now + Duration::days(days);
    let claims = Claims {
        sub: user_id,
        email: email.to_string(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
        jti: uuid::Uuid::new_v4().to_string(),
        typ: TOKEN_TYPE_REFRESH.to_string(),
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret().as_bytes()),
    )?;
    Ok((token, expires_at))
}

fn validate_token(token: &str, expected_type: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret().as_bytes()),
        &Validation::default(),
    )?;
    if token_data.claims.typ != expected_type {
        return Err(jsonwebtoken::errors::ErrorKind::InvalidToken.into());
    }
    Ok(token_data.claims)
}

pub fn validate_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    validate_token(token, TOKEN_TYPE_ACCESS)
}

pub fn validate_refresh_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    validate_token(token, TOKEN_TYPE_REFRESH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_round_trips() {
        let token = create_access_token(7, "player@example.com").unwrap();
        let claims = validate_access_token(&token).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.email, "player@example.com");
    }

    #[test]
    fn refresh_token_is_rejected_as_access_token() {
        let (token, _) = create_refresh_token(7, "player@example.com").unwrap();
        assert!(validate_access_token(&token).is_err());
    }

    #[test]
    fn token_hashes_are_stable_and_distinct() {
        let a = create_access_token(1, "a@example.com").unwrap();
        let b = create_access_token(1, "a@example.com").unwrap();
        assert_eq!(hash_token(&a), hash_token(&a));
        assert_ne!(hash_token(&a), hash_token(&b));
    }
}
