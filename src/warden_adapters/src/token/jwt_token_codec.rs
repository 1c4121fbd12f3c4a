use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use warden_core::{
    AccountId, Clock, GRANT_TYPE_BEARER, Role, SignInSession, TokenCodec, TokenCodecError,
    TokenPair, TokenType,
};

use crate::clock::SystemClock;

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: Secret<String>,
    pub access_token_ttl_in_seconds: i64,
    pub refresh_token_ttl_in_seconds: i64,
}

impl JwtConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub token_type: TokenType,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 tokens whose expiry is judged by the injected clock.
#[derive(Clone)]
pub struct JwtTokenCodec<C = SystemClock> {
    config: JwtConfig,
    clock: C,
}

impl JwtTokenCodec<SystemClock> {
    pub fn new(config: JwtConfig) -> Result<Self, TokenCodecError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> JwtTokenCodec<C> {
    /// Fails when either TTL is not positive or the access token would outlive
    /// the refresh token.
    pub fn with_clock(config: JwtConfig, clock: C) -> Result<Self, TokenCodecError> {
        if config.access_token_ttl_in_seconds <= 0 || config.refresh_token_ttl_in_seconds <= 0 {
            return Err(TokenCodecError::InvalidConfiguration(
                "token TTLs must be positive".to_owned(),
            ));
        }
        if config.access_token_ttl_in_seconds >= config.refresh_token_ttl_in_seconds {
            return Err(TokenCodecError::InvalidConfiguration(
                "access token TTL must be shorter than refresh token TTL".to_owned(),
            ));
        }
        Ok(Self { config, clock })
    }

    fn mint(
        &self,
        subject: &AccountId,
        role: Role,
        token_type: TokenType,
        issued_at: i64,
        ttl_in_seconds: i64,
    ) -> Result<(String, DateTime<Utc>), TokenCodecError> {
        let exp = issued_at
            .checked_add(ttl_in_seconds)
            .ok_or_else(|| TokenCodecError::EncodingFailed("Duration out of range".to_owned()))?;
        let expires_at = DateTime::from_timestamp(exp, 0)
            .ok_or_else(|| TokenCodecError::EncodingFailed("Duration out of range".to_owned()))?;

        let claims = Claims {
            sub: subject.to_string(),
            role,
            token_type,
            jti: Uuid::new_v4().to_string(),
            iat: issued_at,
            exp,
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.config.as_bytes()),
        )
        .map_err(|e| TokenCodecError::EncodingFailed(e.to_string()))?;

        Ok((token, expires_at))
    }

    /// Signature, shape and expiry check.
    fn decode_claims(&self, token: &str) -> Result<Claims, TokenCodecError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is compared against `self.clock` below.
        validation.validate_exp = false;
        validation.leeway = 0;

        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|_| TokenCodecError::DecodingFailed)?;

        if claims.exp <= self.clock.now().timestamp() {
            return Err(TokenCodecError::Expired);
        }
        Ok(claims)
    }
}

impl<C: Clock> TokenCodec for JwtTokenCodec<C> {
    #[tracing::instrument(name = "JwtTokenCodec::create_pair", skip(self))]
    fn create_pair(&self, subject: &AccountId, role: Role) -> Result<TokenPair, TokenCodecError> {
        let issued_at = self.clock.now().timestamp();

        let (access_token, access_token_expires_at) = self.mint(
            subject,
            role,
            TokenType::Access,
            issued_at,
            self.config.access_token_ttl_in_seconds,
        )?;
        let (refresh_token, refresh_token_expires_at) = self.mint(
            subject,
            role,
            TokenType::Refresh,
            issued_at,
            self.config.refresh_token_ttl_in_seconds,
        )?;

        Ok(TokenPair {
            grant_type: GRANT_TYPE_BEARER.to_owned(),
            access_token,
            access_token_expires_at,
            refresh_token,
            refresh_token_expires_at,
        })
    }

    fn validate(&self, token: &str) -> bool {
        match self.decode_claims(token) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!(error = %e, "Token rejected");
                false
            }
        }
    }

    fn subject_of(&self, token: &str) -> Result<AccountId, TokenCodecError> {
        let claims = self.decode_claims(token)?;
        AccountId::parse(&claims.sub).map_err(|_| TokenCodecError::DecodingFailed)
    }

    fn session_of(&self, access_token: &str) -> Result<SignInSession, TokenCodecError> {
        let claims = self.decode_claims(access_token)?;
        if claims.token_type != TokenType::Access {
            return Err(TokenCodecError::WrongTokenType);
        }
        let account_id =
            AccountId::parse(&claims.sub).map_err(|_| TokenCodecError::DecodingFailed)?;
        Ok(SignInSession::new(account_id, claims.role))
    }
}
