//! JWT session tokens
//!
//! A session is an opaque pair of tokens: a short-lived access token checked
//! on every guarded request, and a longer-lived refresh token that can be
//! exchanged (and revoked server-side) for a new pair.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use pairchat_core::Snowflake;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Token kind tag embedded in the claims
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Token kind (access or refresh)
    pub kind: TokenKind,
    /// Session ID linking both tokens of a pair
    pub sid: String,
}

impl Claims {
    /// Get the account ID from the subject claim
    pub fn account_id(&self) -> Result<Snowflake, AppError> {
        self.sub
            .parse::<i64>()
            .map(Snowflake::new)
            .map_err(|_| AppError::InvalidToken)
    }

    /// Check if this is an access token
    #[must_use]
    pub fn is_access(&self) -> bool {
        self.kind == TokenKind::Access
    }

    /// Check if this is a refresh token
    #[must_use]
    pub fn is_refresh(&self) -> bool {
        self.kind == TokenKind::Refresh
    }
}

/// Token pair issued on login/registration/refresh
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

/// Encoding/decoding keys plus token lifetimes
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_expiry: i64,
    refresh_expiry: i64,
}

impl JwtKeys {
    /// Create keys from the shared secret and expiry times (seconds)
    #[must_use]
    pub fn new(secret: &str, access_expiry: i64, refresh_expiry: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            access_expiry,
            refresh_expiry,
        }
    }

    /// Access token lifetime in seconds
    #[must_use]
    pub fn access_expiry(&self) -> i64 {
        self.access_expiry
    }

    /// Refresh token lifetime in seconds
    #[must_use]
    pub fn refresh_expiry(&self) -> i64 {
        self.refresh_expiry
    }

    /// Issue an access + refresh pair for an account under a session id
    pub fn issue_pair(&self, account_id: Snowflake, session_id: &str) -> Result<TokenPair, AppError> {
        let access_token = self.encode(account_id, TokenKind::Access, session_id)?;
        let refresh_token = self.encode(account_id, TokenKind::Refresh, session_id)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            expires_in: self.access_expiry,
        })
    }

    fn encode(
        &self,
        account_id: Snowflake,
        kind: TokenKind,
        session_id: &str,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let expiry = match kind {
            TokenKind::Access => self.access_expiry,
            TokenKind::Refresh => self.refresh_expiry,
        };

        let claims = Claims {
            sub: account_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(expiry)).timestamp(),
            kind,
            sid: session_id.to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Decode and validate a token of either kind
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding, &Validation::default()).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                    _ => AppError::InvalidToken,
                }
            })?;

        Ok(token_data.claims)
    }

    /// Validate an access token and return its claims
    pub fn validate_access(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode(token)?;
        if !claims.is_access() {
            return Err(AppError::InvalidToken);
        }
        Ok(claims)
    }

    /// Validate a refresh token and return its claims
    pub fn validate_refresh(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode(token)?;
        if !claims.is_refresh() {
            return Err(AppError::InvalidToken);
        }
        Ok(claims)
    }
}

impl std::fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtKeys")
            .field("access_expiry", &self.access_expiry)
            .field("refresh_expiry", &self.refresh_expiry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> JwtKeys {
        JwtKeys::new("test-secret-key-that-is-long-enough", 900, 604800)
    }

    #[test]
    fn test_issue_pair() {
        let pair = keys().issue_pair(Snowflake::new(12345), "session-1").unwrap();
        assert!(!pair.access_token.is_empty());
        assert!(!pair.refresh_token.is_empty());
        assert_eq!(pair.expires_in, 900);
    }

    #[test]
    fn test_access_token_claims() {
        let keys = keys();
        let pair = keys.issue_pair(Snowflake::new(12345), "session-1").unwrap();
        let claims = keys.validate_access(&pair.access_token).unwrap();

        assert_eq!(claims.account_id().unwrap(), Snowflake::new(12345));
        assert_eq!(claims.sid, "session-1");
        assert!(claims.is_access());
    }

    #[test]
    fn test_token_kinds_are_enforced() {
        let keys = keys();
        let pair = keys.issue_pair(Snowflake::new(1), "s").unwrap();

        assert!(keys.validate_access(&pair.refresh_token).is_err());
        assert!(keys.validate_refresh(&pair.access_token).is_err());
        assert!(keys.validate_refresh(&pair.refresh_token).is_ok());
    }

    #[test]
    fn test_invalid_token() {
        let result = keys().decode("invalid.token.here");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let pair = keys().issue_pair(Snowflake::new(1), "s").unwrap();
        let other = JwtKeys::new("a-completely-different-secret!!", 900, 604800);
        assert!(other.decode(&pair.access_token).is_err());
    }
}
