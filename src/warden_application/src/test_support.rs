//! In-memory collaborators shared by the use case tests.

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use chrono::{DateTime, Duration, TimeZone, Utc};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;
use warden_core::{
    Account, AccountDirectory, AccountId, AccountStoreError, Clock, Email, GRANT_TYPE_BEARER,
    HashedPassword, Password, PasswordHasher, PasswordHasherError, Role, SessionStore,
    SessionStoreError, SignInSession, TokenCodec, TokenCodecError, TokenPair,
};

#[derive(Clone, Default)]
pub struct MockAccountStore {
    pub accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl MockAccountStore {
    pub async fn insert(&self, account: Account) {
        self.accounts.write().await.insert(*account.id(), account);
    }

    pub async fn get(&self, id: &AccountId) -> Option<Account> {
        self.accounts.read().await.get(id).cloned()
    }
}

#[async_trait::async_trait]
impl AccountDirectory for MockAccountStore {
    async fn exists_by_email(&self, email: &Email) -> Result<bool, AccountStoreError> {
        Ok(self
            .accounts
            .read()
            .await
            .values()
            .any(|a| a.email() == email))
    }

    async fn create(&self, account: Account) -> Result<Account, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.values().any(|a| a.email() == account.email()) {
            return Err(AccountStoreError::AlreadyExists);
        }
        accounts.insert(*account.id(), account.clone());
        Ok(account)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Account, AccountStoreError> {
        self.accounts
            .read()
            .await
            .values()
            .find(|a| a.email() == email)
            .cloned()
            .ok_or(AccountStoreError::NotFound)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Account, AccountStoreError> {
        self.get(id).await.ok_or(AccountStoreError::NotFound)
    }

    async fn delete_by_id(&self, id: &AccountId) -> Result<(), AccountStoreError> {
        self.accounts
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(AccountStoreError::NotFound)
    }
}

#[async_trait::async_trait]
impl SessionStore for MockAccountStore {
    async fn find_by_subject(&self, subject: &AccountId) -> Result<Account, SessionStoreError> {
        self.get(subject).await.ok_or(SessionStoreError::NotFound)
    }

    async fn find_by_refresh_token(&self, token: &str) -> Result<Account, SessionStoreError> {
        self.accounts
            .read()
            .await
            .values()
            .find(|a| a.refresh_token_matches(token))
            .cloned()
            .ok_or(SessionStoreError::NotFound)
    }

    async fn update_refresh_token(
        &self,
        subject: &AccountId,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), SessionStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(subject)
            .ok_or(SessionStoreError::NotFound)?;
        account.update_refresh_token(token.to_owned(), expires_at);
        Ok(())
    }

    async fn replace_refresh_token(
        &self,
        subject: &AccountId,
        expected: &str,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), SessionStoreError> {
        let mut accounts = self.accounts.write().await;
        match accounts.get_mut(subject) {
            Some(account) if account.refresh_token_matches(expected) => {
                account.update_refresh_token(token.to_owned(), expires_at);
                Ok(())
            }
            _ => Err(SessionStoreError::NotFound),
        }
    }
}

/// Reversible "hash" that is good enough to check the plumbing.
#[derive(Clone, Default)]
pub struct MockPasswordHasher;

#[async_trait::async_trait]
impl PasswordHasher for MockPasswordHasher {
    async fn hash(&self, password: &Password) -> Result<HashedPassword, PasswordHasherError> {
        let hashed = format!("hashed:{}", password.as_ref().expose_secret());
        Ok(HashedPassword::new(Secret::from(hashed)))
    }

    async fn verify(
        &self,
        password: &Password,
        hash: &HashedPassword,
    ) -> Result<bool, PasswordHasherError> {
        let expected = format!("hashed:{}", password.as_ref().expose_secret());
        Ok(hash.as_ref().expose_secret() == &expected)
    }
}

/// Issues `kind.subject.role.serial` tokens. Anything else fails validation.
#[derive(Clone, Default)]
pub struct MockTokenCodec {
    serial: Arc<AtomicU64>,
}

impl MockTokenCodec {
    fn parse(token: &str) -> Option<(&str, AccountId, Role)> {
        let mut parts = token.split('.');
        let kind = parts.next()?;
        let subject = AccountId::parse(parts.next()?).ok()?;
        let role = parts.next()?.parse().ok()?;
        parts.next()?;
        Some((kind, subject, role))
    }
}

impl TokenCodec for MockTokenCodec {
    fn create_pair(&self, subject: &AccountId, role: Role) -> Result<TokenPair, TokenCodecError> {
        let serial = self.serial.fetch_add(1, Ordering::SeqCst);
        let now = fixed_now();
        Ok(TokenPair {
            grant_type: GRANT_TYPE_BEARER.to_owned(),
            access_token: format!("access.{subject}.{}.{serial}", role.as_str()),
            access_token_expires_at: now + Duration::minutes(30),
            refresh_token: format!("refresh.{subject}.{}.{serial}", role.as_str()),
            refresh_token_expires_at: now + Duration::days(14),
        })
    }

    fn validate(&self, token: &str) -> bool {
        Self::parse(token).is_some()
    }

    fn subject_of(&self, token: &str) -> Result<AccountId, TokenCodecError> {
        Self::parse(token)
            .map(|(_, subject, _)| subject)
            .ok_or(TokenCodecError::DecodingFailed)
    }

    fn session_of(&self, access_token: &str) -> Result<SignInSession, TokenCodecError> {
        match Self::parse(access_token) {
            Some(("access", subject, role)) => Ok(SignInSession::new(subject, role)),
            Some(_) => Err(TokenCodecError::WrongTokenType),
            None => Err(TokenCodecError::DecodingFailed),
        }
    }
}

#[derive(Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Default for FixedClock {
    fn default() -> Self {
        Self(fixed_now())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
}

pub fn email(raw: &str) -> Email {
    Email::try_from(Secret::from(raw.to_owned())).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::try_from(Secret::from(raw.to_owned())).unwrap()
}

/// A local account whose password is `raw_password` under `MockPasswordHasher`.
pub fn local_account(raw_email: &str, raw_password: &str) -> Account {
    Account::new_local(
        email(raw_email),
        HashedPassword::new(Secret::from(format!("hashed:{raw_password}"))),
    )
}
