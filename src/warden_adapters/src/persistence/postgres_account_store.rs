use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use sqlx::{Pool, Postgres};
use uuid::Uuid;
use warden_core::{
    Account, AccountDirectory, AccountId, AccountStoreError, AuthProvider, Email, HashedPassword,
    Role, SessionStore, SessionStoreError,
};

const ACCOUNT_COLUMNS: &str =
    "id, email, password_hash, role, provider, refresh_token, refresh_token_expires_at";

#[derive(Clone)]
pub struct PostgresAccountStore {
    pool: sqlx::PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresAccountStore { pool }
    }

    async fn fetch_one_where(
        &self,
        condition: &str,
        value: &str,
    ) -> Result<Option<AccountRow>, sqlx::Error> {
        sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE {condition}"
        ))
        .bind(value)
        .fetch_optional(&self.pool)
        .await
    }

    async fn fetch_by_id(&self, id: &AccountId) -> Result<Option<AccountRow>, sqlx::Error> {
        sqlx::query_as::<_, AccountRow>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    email: String,
    password_hash: String,
    role: String,
    provider: String,
    refresh_token: String,
    refresh_token_expires_at: Option<DateTime<Utc>>,
}

impl TryFrom<AccountRow> for Account {
    type Error = String;

    fn try_from(row: AccountRow) -> Result<Self, Self::Error> {
        let email = Email::try_from(Secret::from(row.email)).map_err(|e| e.to_string())?;
        let role = row.role.parse::<Role>().map_err(|e| e.to_string())?;
        let provider = row
            .provider
            .parse::<AuthProvider>()
            .map_err(|e| e.to_string())?;

        Ok(Account::restore(
            AccountId::from(row.id),
            email,
            HashedPassword::new(Secret::from(row.password_hash)),
            role,
            provider,
            row.refresh_token,
            row.refresh_token_expires_at,
        ))
    }
}

fn into_account(row: Option<AccountRow>) -> Result<Account, AccountStoreError> {
    let Some(row) = row else {
        return Err(AccountStoreError::NotFound);
    };
    Account::try_from(row).map_err(AccountStoreError::UnexpectedError)
}

fn into_session_account(row: Option<AccountRow>) -> Result<Account, SessionStoreError> {
    let Some(row) = row else {
        return Err(SessionStoreError::NotFound);
    };
    Account::try_from(row).map_err(SessionStoreError::UnexpectedError)
}

#[async_trait::async_trait]
impl AccountDirectory for PostgresAccountStore {
    #[tracing::instrument(name = "Checking email in PostgreSQL", skip_all)]
    async fn exists_by_email(&self, email: &Email) -> Result<bool, AccountStoreError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM accounts WHERE email = $1)")
            .bind(email.as_ref().expose_secret())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))
    }

    #[tracing::instrument(name = "Adding account to PostgreSQL", skip_all)]
    async fn create(&self, account: Account) -> Result<Account, AccountStoreError> {
        let query = sqlx::query(
            r#"
                INSERT INTO accounts (id, email, password_hash, role, provider, refresh_token, refresh_token_expires_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(account.id().as_uuid())
        .bind(account.email().as_ref().expose_secret())
        .bind(account.password_hash().as_ref().expose_secret())
        .bind(account.role().as_str())
        .bind(account.provider().as_str())
        .bind(account.refresh_token())
        .bind(account.refresh_token_expires_at());

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return AccountStoreError::AlreadyExists;
                }
            }
            AccountStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(account)
    }

    #[tracing::instrument(name = "Retrieving account by email from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Account, AccountStoreError> {
        let row = self
            .fetch_one_where("email = $1", email.as_ref().expose_secret())
            .await
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;
        into_account(row)
    }

    #[tracing::instrument(name = "Retrieving account by id from PostgreSQL", skip_all)]
    async fn find_by_id(&self, id: &AccountId) -> Result<Account, AccountStoreError> {
        let row = self
            .fetch_by_id(id)
            .await
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;
        into_account(row)
    }

    #[tracing::instrument(name = "Delete account from PostgreSQL", skip_all)]
    async fn delete_by_id(&self, id: &AccountId) -> Result<(), AccountStoreError> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AccountStoreError::NotFound);
        }

        Ok(())
    }
}

#[async_trait::async_trait]
impl SessionStore for PostgresAccountStore {
    #[tracing::instrument(name = "Retrieving session by subject from PostgreSQL", skip_all)]
    async fn find_by_subject(&self, subject: &AccountId) -> Result<Account, SessionStoreError> {
        let row = self
            .fetch_by_id(subject)
            .await
            .map_err(|e| SessionStoreError::UnexpectedError(e.to_string()))?;
        into_session_account(row)
    }

    #[tracing::instrument(name = "Retrieving session by refresh token from PostgreSQL", skip_all)]
    async fn find_by_refresh_token(&self, token: &str) -> Result<Account, SessionStoreError> {
        if token.is_empty() {
            return Err(SessionStoreError::NotFound);
        }
        let row = self
            .fetch_one_where("refresh_token = $1 AND refresh_token <> ''", token)
            .await
            .map_err(|e| SessionStoreError::UnexpectedError(e.to_string()))?;
        into_session_account(row)
    }

    #[tracing::instrument(name = "Updating refresh token in PostgreSQL", skip_all)]
    async fn update_refresh_token(
        &self,
        subject: &AccountId,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), SessionStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE accounts
                SET refresh_token = $1, refresh_token_expires_at = $2
                WHERE id = $3
            "#,
        )
        .bind(token)
        .bind(expires_at)
        .bind(subject.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|e| SessionStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(SessionStoreError::NotFound);
        }

        Ok(())
    }

    #[tracing::instrument(name = "Rotating refresh token in PostgreSQL", skip_all)]
    async fn replace_refresh_token(
        &self,
        subject: &AccountId,
        expected: &str,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), SessionStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE accounts
                SET refresh_token = $1, refresh_token_expires_at = $2
                WHERE id = $3 AND refresh_token = $4 AND refresh_token <> ''
            "#,
        )
        .bind(token)
        .bind(expires_at)
        .bind(subject.as_uuid())
        .bind(expected)
        .execute(&self.pool)
        .await
        .map_err(|e| SessionStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(SessionStoreError::NotFound);
        }

        Ok(())
    }
}
