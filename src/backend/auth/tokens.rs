/**
 * Token Service
 *
 * Issues and verifies the signed session tokens that bind a request to a
 * user id. Tokens are stateless: nothing is persisted server-side and the
 * identity is re-derived from the signature on every request.
 *
 * Expiry is configurable. With a ttl set, tokens carry an `exp` claim and
 * verification enforces it; with no ttl, tokens are valid until the secret
 * changes. The unbounded window is a deliberate, documented tradeoff of
 * the stateless design.
 */

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Claims embedded in a session token
///
/// The subject is the canonical identity key: a user id. Everything else
/// about the identity is resolved from the store at request time.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: u64,
    /// Expiration (Unix timestamp); absent when no ttl is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<u64>,
}

/// Token verification failure
///
/// Malformed, tampered, signature-mismatched, and expired tokens all land
/// here; callers translate every variant to 401 without distinguishing.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid token")]
    Invalid(#[from] jsonwebtoken::errors::Error),

    #[error("token subject is not a user id")]
    BadSubject(#[from] uuid::Error),
}

/// Issues and verifies session tokens with a fixed signing secret
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    /// Token lifetime in seconds; `None` disables expiry
    ttl_secs: Option<u64>,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, ttl_secs: Option<u64>) -> Self {
        Self { secret: secret.into(), ttl_secs }
    }

    fn now() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }

    /// Produce a signed token encoding `user_id`
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        let iat = Self::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat,
            exp: self.ttl_secs.map(|ttl| iat + ttl),
        };

        let key = EncodingKey::from_secret(self.secret.as_ref());
        Ok(encode(&Header::default(), &claims, &key)?)
    }

    /// Verify a token and return the embedded user id
    ///
    /// Expiry is checked only when this service is configured with a ttl.
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        let key = DecodingKey::from_secret(self.secret.as_ref());
        let mut validation = Validation::default();
        if self.ttl_secs.is_none() {
            validation.validate_exp = false;
            validation.required_spec_claims.clear();
        }

        let data = decode::<Claims>(token, &key, &validation)?;
        Ok(Uuid::parse_str(&data.claims.sub)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", Some(60 * 60))
    }

    #[test]
    fn test_issue_verify_round_trip() {
        let tokens = service();
        let user_id = Uuid::new_v4();

        let token = tokens.issue(user_id).unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn test_verify_garbage_token() {
        let tokens = service();
        assert!(tokens.verify("not.a.token").is_err());
        assert!(tokens.verify("").is_err());
    }

    #[test]
    fn test_verify_wrong_secret() {
        let token = service().issue(Uuid::new_v4()).unwrap();
        let other = TokenService::new("other-secret", Some(60));
        assert!(other.verify(&token).is_err());
    }

    #[test]
    fn test_no_ttl_issues_token_without_expiry() {
        let tokens = TokenService::new("test-secret", None);
        let user_id = Uuid::new_v4();

        let token = tokens.issue(user_id).unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn test_expired_token_rejected() {
        // Forge an already-expired token with the same secret.
        let now = TokenService::now();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            iat: now - 7200,
            exp: Some(now - 3600),
        };
        let key = EncodingKey::from_secret("test-secret".as_ref());
        let token = encode(&Header::default(), &claims, &key).unwrap();

        assert!(service().verify(&token).is_err());

        // With expiry disabled the same token verifies: the exp claim is
        // present but not enforced.
        let no_ttl = TokenService::new("test-secret", None);
        assert!(no_ttl.verify(&token).is_ok());
    }

    #[test]
    fn test_non_uuid_subject_rejected() {
        let now = TokenService::now();
        let claims = Claims { sub: "not-a-uuid".to_string(), iat: now, exp: Some(now + 60) };
        let key = EncodingKey::from_secret("test-secret".as_ref());
        let token = encode(&Header::default(), &claims, &key).unwrap();

        assert!(matches!(service().verify(&token), Err(TokenError::BadSubject(_))));
    }

    proptest! {
        #[test]
        fn prop_round_trip_any_user_id(bytes in any::<[u8; 16]>()) {
            let tokens = service();
            let user_id = Uuid::from_bytes(bytes);
            let token = tokens.issue(user_id).unwrap();
            prop_assert_eq!(tokens.verify(&token).unwrap(), user_id);
        }

        #[test]
        fn prop_single_byte_flip_invalidates(
            bytes in any::<[u8; 16]>(),
            position in any::<prop::sample::Index>(),
        ) {
            let tokens = service();
            let token = tokens.issue(Uuid::from_bytes(bytes)).unwrap();

            let mut tampered = token.clone().into_bytes();
            let idx = position.index(tampered.len());
            // Flip the low bit, keeping the byte printable ASCII so the
            // string stays valid UTF-8.
            tampered[idx] ^= 0x01;
            let tampered = String::from_utf8(tampered).unwrap();

            prop_assume!(tampered != token);
            prop_assert!(tokens.verify(&tampered).is_err());
        }
    }
}
