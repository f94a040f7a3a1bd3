use chrono::Utc;
use jsonwebtoken::{decode, encode, errors::Error as JwtError, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and checks HS256 access tokens.
#[derive(Clone)]
pub struct TokenManager {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_seconds: i64,
}

impl TokenManager {
    pub fn new(secret: &str, ttl_minutes: i64) -> Self {
        TokenManager {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds: ttl_minutes.saturating_mul(60),
        }
    }

    pub fn issue(&self, user_id: &str) -> Result<String, JwtError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now.saturating_add(self.ttl_seconds),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Checks signature and expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, JwtError> {
        let validation = Validation::new(Algorithm::HS256);
        decode::<Claims>(token, &self.decoding, &validation).map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies_to_same_subject() {
        let tokens = TokenManager::new("test-secret", 15);
        let token = tokens.issue("user-42").unwrap();
        assert!(!token.is_empty());

        let claims = tokens.verify(&token).unwrap();
        assert_eq!(claims.sub, "user-42");
        assert_eq!(claims.exp - claims.iat, 15 * 60);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let issuer = TokenManager::new("secret-a", 15);
        let verifier = TokenManager::new("secret-b", 15);
        let token = issuer.issue("user-42").unwrap();
        assert!(verifier.verify(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let tokens = TokenManager::new("test-secret", 15);
        let now = Utc::now().timestamp();
        let stale = Claims {
            sub: "user-42".into(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(&Header::default(), &stale, &tokens.encoding).unwrap();
        assert!(tokens.verify(&token).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        let tokens = TokenManager::new("test-secret", 15);
        assert!(tokens.verify("not.a.jwt").is_err());
    }
}
