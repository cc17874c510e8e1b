use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    iat: i64,
    exp: i64,
}

/// Stateless HS256 bearer tokens carrying the user id.
/// No revocation: a token stays valid for its full lifetime.
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenCodec {
    pub fn new(secret: &str, ttl_days: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::days(ttl_days),
        }
    }

    pub fn issue(&self, user_id: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::Internal(format!("Token signing failed: {}", e)))
    }

    /// Returns the embedded user id, or `InvalidToken` if the token is
    /// malformed, carries a bad signature, or has expired.
    pub fn verify(&self, token: &str) -> Result<String, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims.sub)
            .map_err(|_| AppError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_verify_round_trip() {
        let codec = TokenCodec::new("test-secret", 7);

        let token = codec.issue("user-42").unwrap();
        assert_eq!(codec.verify(&token).unwrap(), "user-42");
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let codec = TokenCodec::new("test-secret", 7);
        let other = TokenCodec::new("other-secret", 7);

        let token = codec.issue("user-42").unwrap();
        assert!(matches!(
            other.verify(&token),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        // Negative TTL puts exp in the past at issuance
        let codec = TokenCodec::new("test-secret", -1);

        let token = codec.issue("user-42").unwrap();
        assert!(matches!(codec.verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let codec = TokenCodec::new("test-secret", 7);

        let mut token = codec.issue("user-42").unwrap();
        token.pop();
        token.push('A');
        assert!(matches!(codec.verify(&token), Err(AppError::InvalidToken)));

        assert!(matches!(
            codec.verify("not.a.jwt"),
            Err(AppError::InvalidToken)
        ));
    }
}
