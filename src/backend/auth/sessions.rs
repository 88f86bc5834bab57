/**
 * Session Tokens
 *
 * This module issues and verifies the signed session tokens that carry a
 * user's identity and role between requests.
 *
 * # Token Format
 *
 * Tokens are HS256 JSON Web Tokens with the claims
 * `{sub, email, role, iat, exp}`. Callers treat them as opaque strings.
 *
 * # Verification Order
 *
 * 1. The token must split into header, payload and signature segments,
 *    and the first two must decode into an HS256 header and the expected
 *    claim set, otherwise `AuthError::Malformed`.
 * 2. If the current time is at or past `exp` the token is
 *    `AuthError::Expired`, whether or not its signature would verify.
 * 3. The signature segment must verify against the server secret,
 *    otherwise `AuthError::BadSignature`. Anything wrong with that segment
 *    (bad base64, stray dots, wrong MAC) lands here.
 *
 * The secret is handed to `TokenCodec::new` once at startup and the codec is
 * shared read-only through `AppState` afterwards.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{
    dangerous::insecure_decode, decode, encode, Algorithm, DecodingKey, EncodingKey, Header,
    Validation,
};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::backend::auth::error::AuthError;
use crate::shared::Role;

/// Default session lifetime
pub const DEFAULT_TOKEN_TTL_DAYS: i64 = 7;

/// Longest session lifetime the server accepts
pub const MAX_TOKEN_TTL_DAYS: i64 = 3650;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Role
    pub role: Role,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Verified identity extracted from a session token
///
/// Lives only as long as the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub email: String,
    pub role: Role,
}

impl AuthenticatedUser {
    /// Parse the subject as a database user ID
    ///
    /// Every token this server issues carries a UUID subject, so a
    /// non-UUID subject is treated as a malformed credential.
    pub fn user_uuid(&self) -> Result<uuid::Uuid, AuthError> {
        uuid::Uuid::parse_str(&self.user_id).map_err(|_| AuthError::Malformed)
    }
}

impl From<Claims> for AuthenticatedUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
        }
    }
}

/// Issues and verifies session tokens with a fixed secret and TTL
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenCodec")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenCodec {
    /// Create a codec from the signing secret and token lifetime
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    /// Token lifetime
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a session token issued now
    ///
    /// # Arguments
    /// * `subject` - User ID
    /// * `email` - User email
    /// * `role` - User role
    ///
    /// # Returns
    /// JWT token string
    pub fn issue(
        &self,
        subject: &str,
        email: &str,
        role: Role,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_at(subject, email, role, Utc::now())
    }

    /// Create a session token with an explicit issue time
    pub fn issue_at(
        &self,
        subject: &str,
        email: &str,
        role: Role,
        issued_at: DateTime<Utc>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let expires_at = issued_at.checked_add_signed(self.ttl).ok_or_else(|| {
            ErrorKind::Signing(format!("expiry overflows for issue time {}", issued_at))
        })?;

        let claims = Claims {
            sub: subject.to_string(),
            email: email.to_string(),
            role,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Verify a token against the current time
    pub fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token against an explicit point in time
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<AuthenticatedUser, AuthError> {
        let claims = Self::decode_unverified(token)?;

        if now.timestamp() >= claims.exp {
            return Err(AuthError::Expired);
        }

        // Header and payload are known good, so any failure is the signature
        decode::<Claims>(token, &self.decoding_key, &Self::validation()).map_err(|e| {
            tracing::debug!("Session token failed signature check: {:?}", e.kind());
            AuthError::BadSignature
        })?;

        Ok(claims.into())
    }

    /// Decode header and claims without looking at the signature segment
    fn decode_unverified(token: &str) -> Result<Claims, AuthError> {
        let mut segments = token.splitn(3, '.');
        let (Some(header), Some(payload), Some(_signature)) =
            (segments.next(), segments.next(), segments.next())
        else {
            return Err(AuthError::Malformed);
        };

        let data = insecure_decode::<Claims>(format!("{}.{}.", header, payload)).map_err(|e| {
            tracing::debug!("Session token failed to parse: {:?}", e.kind());
            AuthError::Malformed
        })?;

        if data.header.alg != Algorithm::HS256 {
            tracing::debug!("Session token uses unexpected algorithm {:?}", data.header.alg);
            return Err(AuthError::Malformed);
        }

        Ok(data.claims)
    }

    /// Expiry is checked by `verify_at` against its own clock, so the
    /// library's clock-based checks are switched off.
    fn validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;
        validation
    }
}
