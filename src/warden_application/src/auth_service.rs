use async_trait::async_trait;
use warden_core::{
    AccountDirectory, AccountId, Clock, Email, Password, PasswordHasher, SessionStore,
    SignInSession, TokenCodec, TokenCodecError, TokenPair,
};

use crate::use_cases::{
    RefreshTokenError, RefreshTokenUseCase, SignInError, SignInUseCase, SignOutError,
    SignOutUseCase, SignUpError, SignUpUseCase, WithdrawAccountError, WithdrawAccountUseCase,
    WithdrawalOutcome,
};

/// Every way an authentication operation can fail, flattened for the transport.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Account already registered")]
    AlreadyRegistered,
    #[error("Password does not match")]
    MismatchPassword,
    #[error("Invalid refresh token")]
    InvalidRefreshToken,
    #[error("Invalid access token")]
    InvalidAccessToken,
    #[error("Not found")]
    NotFound,
    #[error("Access denied")]
    AccessDenied,
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl PartialEq for AuthError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::AlreadyRegistered, Self::AlreadyRegistered)
                | (Self::MismatchPassword, Self::MismatchPassword)
                | (Self::InvalidRefreshToken, Self::InvalidRefreshToken)
                | (Self::InvalidAccessToken, Self::InvalidAccessToken)
                | (Self::NotFound, Self::NotFound)
                | (Self::AccessDenied, Self::AccessDenied)
                | (Self::Unexpected(_), Self::Unexpected(_))
        )
    }
}

impl From<SignUpError> for AuthError {
    fn from(error: SignUpError) -> Self {
        match error {
            SignUpError::AlreadyRegistered => AuthError::AlreadyRegistered,
            other => AuthError::Unexpected(other.to_string()),
        }
    }
}

impl From<SignInError> for AuthError {
    fn from(error: SignInError) -> Self {
        match error {
            SignInError::NotFound => AuthError::NotFound,
            SignInError::MismatchPassword => AuthError::MismatchPassword,
            other => AuthError::Unexpected(other.to_string()),
        }
    }
}

impl From<RefreshTokenError> for AuthError {
    fn from(error: RefreshTokenError) -> Self {
        match error {
            RefreshTokenError::InvalidRefreshToken => AuthError::InvalidRefreshToken,
            RefreshTokenError::NotFound => AuthError::NotFound,
            other => AuthError::Unexpected(other.to_string()),
        }
    }
}

impl From<SignOutError> for AuthError {
    fn from(error: SignOutError) -> Self {
        match error {
            SignOutError::InvalidRefreshToken => AuthError::InvalidRefreshToken,
            SignOutError::NotFound => AuthError::NotFound,
            other => AuthError::Unexpected(other.to_string()),
        }
    }
}

impl From<WithdrawAccountError> for AuthError {
    fn from(error: WithdrawAccountError) -> Self {
        match error {
            WithdrawAccountError::AccessDenied => AuthError::AccessDenied,
            WithdrawAccountError::NotFound => AuthError::NotFound,
            other => AuthError::Unexpected(other.to_string()),
        }
    }
}

/// The account and session lifecycle as seen by a transport.
#[async_trait]
pub trait AuthLifecycle: Send + Sync + 'static {
    async fn sign_up(&self, email: Email, password: Password) -> Result<(), AuthError>;
    async fn sign_in(&self, email: Email, password: Password) -> Result<TokenPair, AuthError>;
    async fn refresh_token(&self, refresh_token: &str) -> Result<TokenPair, AuthError>;
    async fn sign_out(&self, refresh_token: &str) -> Result<(), AuthError>;
    async fn withdraw_account(
        &self,
        session: &SignInSession,
        target: &AccountId,
    ) -> Result<WithdrawalOutcome, AuthError>;
    /// Principal behind a bearer access token.
    fn resolve_session(&self, access_token: &str) -> Result<SignInSession, AuthError>;
}

/// Wires the use cases to one set of collaborators.
pub struct AuthService<A, S, H, T, C>
where
    A: AccountDirectory,
    S: SessionStore,
    H: PasswordHasher,
    T: TokenCodec,
    C: Clock,
{
    directory: A,
    sessions: S,
    hasher: H,
    tokens: T,
    clock: C,
}

impl<A, S, H, T, C> AuthService<A, S, H, T, C>
where
    A: AccountDirectory,
    S: SessionStore,
    H: PasswordHasher,
    T: TokenCodec,
    C: Clock,
{
    pub fn new(directory: A, sessions: S, hasher: H, tokens: T, clock: C) -> Self {
        Self {
            directory,
            sessions,
            hasher,
            tokens,
            clock,
        }
    }

    pub fn tokens(&self) -> &T {
        &self.tokens
    }
}

#[async_trait]
impl<A, S, H, T, C> AuthLifecycle for AuthService<A, S, H, T, C>
where
    A: AccountDirectory + 'static,
    S: SessionStore + 'static,
    H: PasswordHasher + 'static,
    T: TokenCodec + 'static,
    C: Clock + 'static,
{
    async fn sign_up(&self, email: Email, password: Password) -> Result<(), AuthError> {
        SignUpUseCase::new(&self.directory, &self.hasher)
            .execute(email, password)
            .await?;
        Ok(())
    }

    async fn sign_in(&self, email: Email, password: Password) -> Result<TokenPair, AuthError> {
        Ok(
            SignInUseCase::new(&self.directory, &self.sessions, &self.hasher, &self.tokens)
                .execute(email, password)
                .await?,
        )
    }

    async fn refresh_token(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        Ok(RefreshTokenUseCase::new(&self.sessions, &self.tokens)
            .execute(refresh_token)
            .await?)
    }

    async fn sign_out(&self, refresh_token: &str) -> Result<(), AuthError> {
        Ok(
            SignOutUseCase::new(&self.sessions, &self.tokens, &self.clock)
                .execute(refresh_token)
                .await?,
        )
    }

    async fn withdraw_account(
        &self,
        session: &SignInSession,
        target: &AccountId,
    ) -> Result<WithdrawalOutcome, AuthError> {
        Ok(WithdrawAccountUseCase::new(&self.directory)
            .execute(session, target)
            .await?)
    }

    fn resolve_session(&self, access_token: &str) -> Result<SignInSession, AuthError> {
        self.tokens
            .session_of(access_token)
            .map_err(|error| match error {
                TokenCodecError::EncodingFailed(e) | TokenCodecError::InvalidConfiguration(e) => {
                    AuthError::Unexpected(e)
                }
                _ => AuthError::InvalidAccessToken,
            })
    }
}
