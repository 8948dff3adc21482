/// Authentication service - JWT and password handling
use crate::error::{Result, ServerError};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use jukebox_core::UserId;
use serde::{Deserialize, Serialize};

/// Lowest bcrypt cost accepted
pub const MIN_HASH_COST: u32 = 4;
/// Highest bcrypt cost accepted
pub const MAX_HASH_COST: u32 = 31;
/// Cost used unless overridden
pub const DEFAULT_HASH_COST: u32 = 10;

#[derive(Clone)]
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: Duration,
    hash_cost: u32,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("token_ttl", &self.token_ttl)
            .field("hash_cost", &self.hash_cost)
            .finish_non_exhaustive()
    }
}

/// Token payload: `sub` is the user id, `iat`/`exp` are unix seconds
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

impl AuthService {
    pub fn new(secret: &str, token_ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_ttl: Duration::seconds(token_ttl_secs as i64),
            hash_cost: DEFAULT_HASH_COST,
        }
    }

    /// Override the bcrypt cost (clamped to the valid range)
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost.clamp(MIN_HASH_COST, MAX_HASH_COST);
        self
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Hash a password using bcrypt
    ///
    /// Runs on the blocking thread pool.
    pub async fn hash_password(&self, password: &str) -> Result<String> {
        if password.is_empty() {
            return Err(ServerError::BadRequest(
                "Password must not be empty".to_string(),
            ));
        }

        let password = password.to_string();
        let cost = self.hash_cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| ServerError::Internal(format!("Hashing task failed: {}", e)))?
            .map_err(ServerError::from)
    }

    /// Verify a password against a hash
    pub async fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        let password = password.to_string();
        let hash = hash.to_string();
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| ServerError::Internal(format!("Verification task failed: {}", e)))?
            .map_err(ServerError::from)
    }

    /// Create a token for `user_id`, valid from now for the configured ttl
    pub fn issue_token(&self, user_id: UserId) -> Result<String> {
        self.issue_token_at(user_id, Utc::now())
    }

    /// Create a token as if it had been issued at `issued_at`
    pub fn issue_token_at(&self, user_id: UserId, issued_at: DateTime<Utc>) -> Result<String> {
        let claims = Claims {
            sub: user_id.to_string(),
            exp: (issued_at + self.token_ttl).timestamp(),
            iat: issued_at.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(ServerError::from)
    }

    /// Verify a token and return the user it was issued for
    ///
    /// Bad signatures, malformed tokens and expired tokens all yield
    /// `ServerError::InvalidToken`.
    pub fn verify_token(&self, token: &str) -> Result<UserId> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!("Token rejected: {}", e);
            ServerError::InvalidToken
        })?;

        token_data
            .claims
            .sub
            .parse::<UserId>()
            .map_err(|_| ServerError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new("secret", 3600).with_hash_cost(MIN_HASH_COST)
    }

    #[tokio::test]
    async fn test_password_hashing() {
        let auth = service();
        let password = "my_secure_password";

        let hash = auth.hash_password(password).await.unwrap();
        assert!(auth.verify_password(password, &hash).await.unwrap());
        assert!(!auth.verify_password("wrong_password", &hash).await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_password_rejected() {
        let result = service().hash_password("").await;
        assert!(matches!(result, Err(ServerError::BadRequest(_))));
    }

    #[test]
    fn test_token_creation_and_verification() {
        let auth = service();

        let token = auth.issue_token(42).unwrap();
        assert_eq!(auth.verify_token(&token).unwrap(), 42);
    }

    #[test]
    fn test_expired_token() {
        let auth = service();
        let issued_at = Utc::now() - Duration::seconds(3601);

        let token = auth.issue_token_at(7, issued_at).unwrap();
        assert!(matches!(
            auth.verify_token(&token),
            Err(ServerError::InvalidToken)
        ));
    }

    #[test]
    fn test_hash_cost_is_clamped() {
        let auth = AuthService::new("secret", 60).with_hash_cost(1);
        assert_eq!(auth.hash_cost, MIN_HASH_COST);
    }
}
