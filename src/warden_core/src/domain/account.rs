use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::email::Email;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccountError {
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Invalid password")]
    InvalidPassword,
    #[error("Invalid account id")]
    InvalidAccountId,
    #[error("Unknown role: {0}")]
    UnknownRole(String),
    #[error("Unknown auth provider: {0}")]
    UnknownProvider(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(Uuid);

impl AccountId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> Result<Self, AccountError> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| AccountError::InvalidAccountId)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for AccountId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "USER",
            Role::Admin => "ADMIN",
        }
    }
}

impl FromStr for Role {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "USER" => Ok(Role::User),
            "ADMIN" => Ok(Role::Admin),
            other => Err(AccountError::UnknownRole(other.to_owned())),
        }
    }
}

/// Where the account's credentials live. Only `Local` accounts carry a usable
/// password hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Local,
    Google,
    Github,
}

impl AuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
            AuthProvider::Github => "github",
        }
    }
}

impl FromStr for AuthProvider {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(AuthProvider::Local),
            "google" => Ok(AuthProvider::Google),
            "github" => Ok(AuthProvider::Github),
            other => Err(AccountError::UnknownProvider(other.to_owned())),
        }
    }
}

/// Output of a `PasswordHasher`. Kept as a separate type from `Password` so a
/// plaintext value can never be stored by accident.
#[derive(Debug, Clone)]
pub struct HashedPassword(Secret<String>);

impl HashedPassword {
    pub fn new(hash: Secret<String>) -> Self {
        Self(hash)
    }
}

impl AsRef<Secret<String>> for HashedPassword {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    email: Email,
    password_hash: HashedPassword,
    role: Role,
    provider: AuthProvider,
    refresh_token: String,
    refresh_token_expires_at: Option<DateTime<Utc>>,
}

impl Account {
    /// A freshly registered local account: plain user, no session.
    pub fn new_local(email: Email, password_hash: HashedPassword) -> Self {
        Self {
            id: AccountId::new(),
            email,
            password_hash,
            role: Role::User,
            provider: AuthProvider::Local,
            refresh_token: String::new(),
            refresh_token_expires_at: None,
        }
    }

    /// Rebuild an account from persisted state.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: AccountId,
        email: Email,
        password_hash: HashedPassword,
        role: Role,
        provider: AuthProvider,
        refresh_token: String,
        refresh_token_expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            email,
            password_hash,
            role,
            provider,
            refresh_token,
            refresh_token_expires_at,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &HashedPassword {
        &self.password_hash
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn provider(&self) -> AuthProvider {
        self.provider
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    pub fn refresh_token_expires_at(&self) -> Option<DateTime<Utc>> {
        self.refresh_token_expires_at
    }

    pub fn has_session(&self) -> bool {
        !self.refresh_token.is_empty()
    }

    /// Exact comparison against the stored refresh token. An empty stored value
    /// matches nothing, including an empty candidate.
    pub fn refresh_token_matches(&self, candidate: &str) -> bool {
        !self.refresh_token.is_empty() && self.refresh_token == candidate
    }

    pub fn update_refresh_token(&mut self, token: String, expires_at: DateTime<Utc>) {
        self.refresh_token = token;
        self.refresh_token_expires_at = Some(expires_at);
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.email == other.email
            && self.password_hash.0.expose_secret() == other.password_hash.0.expose_secret()
            && self.role == other.role
            && self.provider == other.provider
            && self.refresh_token == other.refresh_token
            && self.refresh_token_expires_at == other.refresh_token_expires_at
    }
}
