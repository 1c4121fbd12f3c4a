use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{
    account::{AccountId, HashedPassword, Role},
    password::Password,
    session::SignInSession,
    token::TokenPair,
};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),
    #[error("Stored password hash is malformed: {0}")]
    MalformedHash(String),
}

/// One-way, salted password hashing.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<HashedPassword, PasswordHasherError>;

    /// `Ok(false)` means the password does not match; errors are reserved for
    /// infrastructure failures.
    async fn verify(
        &self,
        password: &Password,
        hash: &HashedPassword,
    ) -> Result<bool, PasswordHasherError>;
}

#[derive(Debug, Error)]
pub enum TokenCodecError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
    #[error("Failed to decode token")]
    DecodingFailed,
    #[error("Token expired")]
    Expired,
    #[error("Unexpected token type")]
    WrongTokenType,
    #[error("Invalid token configuration: {0}")]
    InvalidConfiguration(String),
}

/// Mints and verifies signed tokens.
pub trait TokenCodec: Send + Sync {
    /// Creates a fresh pair for `subject`. The access half always expires before
    /// the refresh half. Persisting the refresh half is the caller's job.
    fn create_pair(&self, subject: &AccountId, role: Role) -> Result<TokenPair, TokenCodecError>;

    /// Signature and expiry check. Never fails loudly: malformed, tampered or
    /// expired input simply yields `false`.
    fn validate(&self, token: &str) -> bool;

    /// Subject embedded in a token. Callers must `validate` first.
    fn subject_of(&self, token: &str) -> Result<AccountId, TokenCodecError>;

    /// Resolves the principal of a valid access token. Refresh tokens are
    /// rejected with `WrongTokenType`.
    fn session_of(&self, access_token: &str) -> Result<SignInSession, TokenCodecError>;
}

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
