use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use warden_core::{
    Account, AccountDirectory, AccountId, AccountStoreError, Email, SessionStore,
    SessionStoreError,
};

/// In-memory account store. Serves both the directory and the session side,
/// so clones share one map.
#[derive(Default, Clone)]
pub struct HashMapAccountStore {
    accounts: Arc<RwLock<HashMap<AccountId, Account>>>,
}

impl HashMapAccountStore {
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait::async_trait]
impl AccountDirectory for HashMapAccountStore {
    async fn exists_by_email(&self, email: &Email) -> Result<bool, AccountStoreError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.values().any(|account| account.email() == email))
    }

    async fn create(&self, account: Account) -> Result<Account, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts
            .values()
            .any(|existing| existing.email() == account.email())
        {
            return Err(AccountStoreError::AlreadyExists);
        }
        accounts.insert(*account.id(), account.clone());
        Ok(account)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Account, AccountStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .values()
            .find(|account| account.email() == email)
            .cloned()
            .ok_or(AccountStoreError::NotFound)
    }

    async fn find_by_id(&self, id: &AccountId) -> Result<Account, AccountStoreError> {
        let accounts = self.accounts.read().await;
        accounts.get(id).cloned().ok_or(AccountStoreError::NotFound)
    }

    async fn delete_by_id(&self, id: &AccountId) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        accounts.remove(id).ok_or(AccountStoreError::NotFound)?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl SessionStore for HashMapAccountStore {
    async fn find_by_subject(&self, subject: &AccountId) -> Result<Account, SessionStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .get(subject)
            .cloned()
            .ok_or(SessionStoreError::NotFound)
    }

    async fn find_by_refresh_token(&self, token: &str) -> Result<Account, SessionStoreError> {
        let accounts = self.accounts.read().await;
        accounts
            .values()
            .find(|account| account.refresh_token_matches(token))
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
        let account = accounts
            .get_mut(subject)
            .filter(|account| account.refresh_token_matches(expected))
            .ok_or(SessionStoreError::NotFound)?;
        account.update_refresh_token(token.to_owned(), expires_at);
        Ok(())
    }
}
