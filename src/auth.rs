// ABOUTME: JWT-based user authentication and password hashing
// ABOUTME: Handles token generation, validation, bearer header parsing, and bcrypt hashing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Burjo Fitness

//! # Authentication
//!
//! Tokens are HS256-signed JWTs carrying the user id as `sub`. Passwords are
//! hashed with bcrypt on the blocking thread pool.

use crate::config::AuthConfig;
use crate::constants::service_names;
use crate::errors::{AppError, AppResult};
use anyhow::Result;
use axum::http::HeaderMap;
use burjo_core::models::User;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};
use uuid::Uuid;

/// `JWT` validation error with detailed information
#[derive(Debug, Clone)]
pub enum JwtValidationError {
    /// Token has expired
    TokenExpired {
        /// When the token expired
        expired_at: DateTime<Utc>,
        /// Current time for reference
        current_time: DateTime<Utc>,
    },
    /// Token signature or claims are invalid
    TokenInvalid {
        /// Reason for invalidity
        reason: String,
    },
    /// Token is malformed (not proper `JWT` format)
    TokenMalformed {
        /// Details about malformation
        details: String,
    },
}

impl fmt::Display for JwtValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenExpired {
                expired_at,
                current_time,
            } => {
                let minutes = current_time.signed_duration_since(*expired_at).num_minutes();
                write!(
                    f,
                    "JWT token expired {minutes} minutes ago at {}",
                    expired_at.format("%Y-%m-%d %H:%M:%S UTC")
                )
            }
            Self::TokenInvalid { reason } => write!(f, "JWT token is invalid: {reason}"),
            Self::TokenMalformed { details } => write!(f, "JWT token is malformed: {details}"),
        }
    }
}

impl std::error::Error for JwtValidationError {}

impl From<JwtValidationError> for AppError {
    fn from(error: JwtValidationError) -> Self {
        match error {
            JwtValidationError::TokenExpired { .. } => Self::auth_expired(),
            other => Self::auth_invalid(other.to_string()),
        }
    }
}

/// `JWT` claims for user authentication
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User `ID`
    pub sub: String,
    /// User email
    pub email: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
    /// Audience (who the token is intended for)
    pub aud: String,
}

/// Authenticated caller
#[derive(Debug, Clone, Copy)]
pub struct AuthResult {
    /// Authenticated user `ID`
    pub user_id: Uuid,
}

/// Issued token with its expiry
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Encoded JWT
    pub token: String,
    /// Expiry instant
    pub expires_at: DateTime<Utc>,
}

/// Token issuer/validator and password hasher
#[derive(Clone)]
pub struct AuthManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_expiry_hours: i64,
    bcrypt_cost: u32,
}

impl fmt::Debug for AuthManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthManager")
            .field("token_expiry_hours", &self.token_expiry_hours)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish_non_exhaustive()
    }
}

impl AuthManager {
    /// Create a new authentication manager with an explicit secret
    #[must_use]
    pub fn new(secret: &[u8], token_expiry_hours: i64, bcrypt_cost: u32) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            token_expiry_hours,
            bcrypt_cost,
        }
    }

    /// Create from configuration, generating a random secret when none is set
    ///
    /// # Errors
    ///
    /// Returns an error if the system RNG fails
    pub fn from_config(config: &AuthConfig) -> Result<Self> {
        let manager = if let Some(secret) = &config.jwt_secret {
            Self::new(secret.as_bytes(), config.jwt_expiry_hours, config.bcrypt_cost)
        } else {
            warn!("JWT_SECRET not set; generated an ephemeral secret, tokens will not survive restarts");
            let secret = generate_jwt_secret()?;
            Self::new(&secret, config.jwt_expiry_hours, config.bcrypt_cost)
        };
        Ok(manager)
    }

    /// Token lifetime in hours
    #[must_use]
    pub const fn token_expiry_hours(&self) -> i64 {
        self.token_expiry_hours
    }

    /// Generate an HS256 `JWT` for `user`
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails
    pub fn generate_token(&self, user: &User) -> AppResult<IssuedToken> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.token_expiry_hours);
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            aud: service_names::BURJO_SERVER.to_owned(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;
        Ok(IssuedToken { token, expires_at })
    }

    /// Validate a token and return its claims
    ///
    /// # Errors
    ///
    /// Returns a [`JwtValidationError`] describing why the token was rejected
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtValidationError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.set_audience(&[service_names::BURJO_SERVER]);

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| Self::convert_jwt_error(&e))?;

        let current_time = Utc::now();
        if current_time.timestamp() > claims.exp {
            let expired_at = DateTime::from_timestamp(claims.exp, 0).unwrap_or(current_time);
            debug!(user_id = %claims.sub, "Rejected expired token");
            return Err(JwtValidationError::TokenExpired {
                expired_at,
                current_time,
            });
        }
        Ok(claims)
    }

    fn convert_jwt_error(e: &jsonwebtoken::errors::Error) -> JwtValidationError {
        use jsonwebtoken::errors::ErrorKind;
        debug!("JWT token validation failed: {:?}", e);

        match e.kind() {
            ErrorKind::InvalidSignature => JwtValidationError::TokenInvalid {
                reason: "Token signature verification failed".into(),
            },
            ErrorKind::InvalidAudience => JwtValidationError::TokenInvalid {
                reason: "Token audience mismatch".into(),
            },
            ErrorKind::InvalidToken | ErrorKind::Base64(_) | ErrorKind::Json(_) | ErrorKind::Utf8(_) => {
                JwtValidationError::TokenMalformed {
                    details: e.to_string(),
                }
            }
            _ => JwtValidationError::TokenInvalid {
                reason: format!("Token validation failed: {e}"),
            },
        }
    }

    /// Resolve the caller from an `Authorization: Bearer` header
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when the header is absent and `AuthInvalid` or
    /// `AuthExpired` when the token does not validate
    pub fn authenticate_request(&self, headers: &HeaderMap) -> AppResult<AuthResult> {
        let header = headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .ok_or_else(AppError::auth_required)?;
        let token = header
            .strip_prefix("Bearer ")
            .or_else(|| header.strip_prefix("bearer "))
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::auth_invalid("Authorization header must use Bearer scheme"))?;

        let claims = self.validate_token(token)?;
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::auth_invalid("Token subject is not a valid user id"))?;
        Ok(AuthResult { user_id })
    }

    /// Hash a password with the configured bcrypt cost
    ///
    /// # Errors
    ///
    /// Returns an internal error if hashing fails
    pub async fn hash_password(&self, password: &str) -> AppResult<String> {
        let password = password.to_owned();
        let cost = self.bcrypt_cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {e}")))?
            .map_err(|e| AppError::internal(format!("Password hashing error: {e}")))
    }

    /// Check `password` against a stored bcrypt hash
    ///
    /// # Errors
    ///
    /// Returns an internal error if the blocking task fails
    pub async fn verify_password(&self, password: &str, hash: &str) -> AppResult<bool> {
        let password = password.to_owned();
        let hash = hash.to_owned();
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
            .await
            .map_err(|e| AppError::internal(format!("Password verification task failed: {e}")))?
            .map_or_else(
                |e| {
                    warn!("Stored password hash could not be parsed: {e}");
                    Ok(false)
                },
                Ok,
            )
    }
}

/// Generate a random `JWT` secret
///
/// # Errors
///
/// Returns an error if the system RNG fails
pub fn generate_jwt_secret() -> Result<[u8; 64]> {
    use ring::rand::{SecureRandom, SystemRandom};

    let rng = SystemRandom::new();
    let mut secret = [0u8; 64];
    rng.fill(&mut secret).map_err(|e| {
        tracing::error!("Failed to generate JWT secret: {}", e);
        anyhow::anyhow!("System RNG failure - cannot generate secure JWT secret")
    })?;
    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn manager() -> AuthManager {
        AuthManager::new(b"unit-test-secret", 24, 4)
    }

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            email: "sari@example.com".to_owned(),
            display_name: Some("Sari".to_owned()),
            password_hash: String::new(),
            created_at: Utc::now(),
            last_active: Utc::now(),
        }
    }

    fn bearer(token: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
        );
        headers
    }

    #[test]
    fn test_token_round_trip_resolves_user() {
        let auth = manager();
        let user = user();
        let issued = auth.generate_token(&user).unwrap();

        let result = auth.authenticate_request(&bearer(&issued.token)).unwrap();
        assert_eq!(result.user_id, user.id);
        assert!(issued.expires_at > Utc::now());
    }

    #[test]
    fn test_token_from_other_secret_is_rejected() {
        let issued = AuthManager::new(b"another-secret", 24, 4)
            .generate_token(&user())
            .unwrap();
        let err = manager().validate_token(&issued.token).unwrap_err();
        assert!(matches!(err, JwtValidationError::TokenInvalid { .. }));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let auth = AuthManager::new(b"unit-test-secret", -1, 4);
        let issued = auth.generate_token(&user()).unwrap();
        let err = auth.validate_token(&issued.token).unwrap_err();
        assert!(matches!(err, JwtValidationError::TokenExpired { .. }));
        assert_eq!(AppError::from(err).http_status(), 401);
    }

    #[test]
    fn test_missing_and_malformed_headers() {
        let auth = manager();
        assert!(auth.authenticate_request(&HeaderMap::new()).is_err());

        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Basic abc"));
        assert!(auth.authenticate_request(&headers).is_err());

        assert!(auth.authenticate_request(&bearer("not-a-jwt")).is_err());
    }

    #[tokio::test]
    async fn test_password_hash_and_verify() {
        let auth = manager();
        let hash = auth.hash_password("rahasia123").await.unwrap();
        assert_ne!(hash, "rahasia123");
        assert!(auth.verify_password("rahasia123", &hash).await.unwrap());
        assert!(!auth.verify_password("salah", &hash).await.unwrap());
        assert!(!auth.verify_password("x", "not-a-hash").await.unwrap());
    }

    #[test]
    fn test_generated_secrets_differ() {
        assert_ne!(generate_jwt_secret().unwrap(), generate_jwt_secret().unwrap());
    }
}
