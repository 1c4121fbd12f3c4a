use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{
    account::{Account, AccountId},
    email::Email,
};

// AccountDirectory port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Account already exists")]
    AlreadyExists,
    #[error("Account not found")]
    NotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::AlreadyExists, Self::AlreadyExists)
                | (Self::NotFound, Self::NotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Lookup, creation and removal of accounts.
#[async_trait]
pub trait AccountDirectory: Send + Sync {
    async fn exists_by_email(&self, email: &Email) -> Result<bool, AccountStoreError>;
    /// Persists a new account. Fails with `AlreadyExists` when the email is taken.
    async fn create(&self, account: Account) -> Result<Account, AccountStoreError>;
    async fn find_by_email(&self, email: &Email) -> Result<Account, AccountStoreError>;
    async fn find_by_id(&self, id: &AccountId) -> Result<Account, AccountStoreError>;
    /// Removes the account together with its refresh-token state.
    async fn delete_by_id(&self, id: &AccountId) -> Result<(), AccountStoreError>;
}

// SessionStore port trait and errors
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Session not found")]
    NotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for SessionStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::NotFound, Self::NotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// The refresh-token half of an account's state.
///
/// Every write is atomic per account. An empty stored token represents "no
/// session" and must never be matched by any lookup.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn find_by_subject(&self, subject: &AccountId) -> Result<Account, SessionStoreError>;

    /// Exact match against the currently stored refresh token.
    async fn find_by_refresh_token(&self, token: &str) -> Result<Account, SessionStoreError>;

    /// Unconditionally overwrites the stored refresh token.
    async fn update_refresh_token(
        &self,
        subject: &AccountId,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), SessionStoreError>;

    /// Overwrites the stored refresh token only if it still equals `expected`.
    ///
    /// Returns `NotFound` when the account is gone or another writer got there
    /// first, so at most one caller can consume a given refresh token.
    async fn replace_refresh_token(
        &self,
        subject: &AccountId,
        expected: &str,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), SessionStoreError>;
}
