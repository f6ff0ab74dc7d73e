// Bearer token issue and verification (HS256)

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims carried by every access token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// User ID (subject)
    pub sub: Uuid,
    /// Issued-at timestamp (seconds since epoch)
    pub iat: usize,
    /// Expiry timestamp (seconds since epoch)
    pub exp: usize,
}

/// Issues an access token for `user_id` valid for `ttl`
///
/// # Example
/// ```
/// use chrono::Duration;
/// use ligamanager_api::auth::jwt::{create_token, verify_token};
/// use uuid::Uuid;
///
/// let user_id = Uuid::new_v4();
/// let token = create_token(user_id, "secret", Duration::hours(8)).unwrap();
/// assert_eq!(verify_token(&token, "secret").unwrap().sub, user_id);
/// ```
pub fn create_token(user_id: Uuid, secret: &str, ttl: Duration) -> Result<String, String> {
    let now = Utc::now();
    let expires = now
        .checked_add_signed(ttl)
        .ok_or_else(|| "Token expiry out of range".to_string())?;

    let claims = Claims {
        sub: user_id,
        iat: epoch_seconds(now.timestamp())?,
        exp: epoch_seconds(expires.timestamp())?,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| e.to_string())
}

fn epoch_seconds(timestamp: i64) -> Result<usize, String> {
    usize::try_from(timestamp).map_err(|_| format!("Timestamp before the epoch: {}", timestamp))
}

/// Verifies signature and expiry, returning the claims
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, String> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SECRET: &str = "test-secret-key-for-unit-tests";

    #[test]
    fn token_round_trips_subject() {
        let user_id = Uuid::new_v4();
        let token = create_token(user_id, TEST_SECRET, Duration::hours(1)).unwrap();

        let claims = verify_token(&token, TEST_SECRET).unwrap();
        assert_eq!(claims.sub, user_id);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn wrong_secret_fails() {
        let token = create_token(Uuid::new_v4(), TEST_SECRET, Duration::hours(1)).unwrap();

        assert!(verify_token(&token, "wrong-secret").is_err());
    }

    #[test]
    fn garbage_token_fails() {
        assert!(verify_token("invalid.token.string", TEST_SECRET).is_err());
    }

    #[test]
    fn expired_token_fails() {
        // Past the default 60s leeway
        let token = create_token(Uuid::new_v4(), TEST_SECRET, Duration::minutes(-5)).unwrap();

        assert!(verify_token(&token, TEST_SECRET).is_err());
    }

    #[test]
    fn out_of_range_ttl_is_an_error() {
        let user_id = Uuid::new_v4();

        assert!(create_token(user_id, TEST_SECRET, Duration::MAX).is_err());
        assert!(create_token(user_id, TEST_SECRET, Duration::MIN).is_err());
        // Lands before 1970 instead of wrapping into a far-future expiry
        let before_epoch = Duration::days(365 * 100);
        assert!(create_token(user_id, TEST_SECRET, -before_epoch).is_err());
    }

    #[test]
    fn expiry_follows_ttl() {
        let token = create_token(Uuid::new_v4(), TEST_SECRET, Duration::hours(8)).unwrap();
        let claims = verify_token(&token, TEST_SECRET).unwrap();

        let ttl = claims.exp as i64 - claims.iat as i64;
        assert_eq!(ttl, Duration::hours(8).num_seconds());
    }
}
