// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, TokenClaims, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::{security::TokenManager, time::Clock},
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const TOKEN_TYPE: &str = "Bearer";
const INVALID_TOKEN: &str = "invalid or expired token";

/// Wire-format claims. `username` and `role` ride along for client display;
/// authorization never trusts them, only `sub`.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    username: String,
    role: String,
    iat: i64,
    exp: i64,
}

/// HS256 tokens signed with a shared secret.
pub struct JwtTokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl JwtTokenManager {
    pub fn new(secret: &[u8], ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation: Validation::default(),
            ttl,
            clock,
        }
    }
}

fn timestamp_to_datetime(secs: i64) -> ApplicationResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| ApplicationError::unauthorized(INVALID_TOKEN))
}

#[async_trait]
impl TokenManager for JwtTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = self.clock.now();
        let expires_at = issued_at + self.ttl;

        let claims = Claims {
            sub: i64::from(subject.user_id).to_string(),
            username: subject.username,
            role: subject.role.as_str().to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let access_token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(AuthTokenDto {
            access_token,
            token_type: TOKEN_TYPE.to_string(),
            issued_at,
            expires_at,
            expires_in: self.ttl.num_seconds(),
        })
    }

    async fn verify(&self, token: &str) -> ApplicationResult<TokenClaims> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| ApplicationError::unauthorized(INVALID_TOKEN))?;

        let user_id = data
            .claims
            .sub
            .parse::<i64>()
            .ok()
            .and_then(|id| UserId::new(id).ok())
            .ok_or_else(|| ApplicationError::unauthorized(INVALID_TOKEN))?;

        Ok(TokenClaims {
            user_id,
            issued_at: timestamp_to_datetime(data.claims.iat)?,
            expires_at: timestamp_to_datetime(data.claims.exp)?,
        })
    }
}
