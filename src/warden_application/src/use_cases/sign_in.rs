use warden_core::{
    AccountDirectory, AccountStoreError, AuthProvider, Email, Password, PasswordHasher,
    PasswordHasherError, SessionStore, SessionStoreError, TokenCodec, TokenCodecError, TokenPair,
};

/// Error types specific to sign-in use case
#[derive(Debug, thiserror::Error)]
pub enum SignInError {
    #[error("Account not found")]
    NotFound,
    #[error("Password does not match")]
    MismatchPassword,
    #[error("Account store error: {0}")]
    AccountStoreError(AccountStoreError),
    #[error("Session store error: {0}")]
    SessionStoreError(SessionStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
    #[error("Token error: {0}")]
    TokenCodecError(#[from] TokenCodecError),
}

impl From<AccountStoreError> for SignInError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::NotFound => SignInError::NotFound,
            other => SignInError::AccountStoreError(other),
        }
    }
}

impl From<SessionStoreError> for SignInError {
    fn from(error: SessionStoreError) -> Self {
        match error {
            // The account vanished between lookup and write.
            SessionStoreError::NotFound => SignInError::NotFound,
            other => SignInError::SessionStoreError(other),
        }
    }
}

/// Sign-in use case - checks credentials and opens a session
pub struct SignInUseCase<'a, A, S, H, T>
where
    A: AccountDirectory,
    S: SessionStore,
    H: PasswordHasher,
    T: TokenCodec,
{
    directory: &'a A,
    sessions: &'a S,
    hasher: &'a H,
    tokens: &'a T,
}

impl<'a, A, S, H, T> SignInUseCase<'a, A, S, H, T>
where
    A: AccountDirectory,
    S: SessionStore,
    H: PasswordHasher,
    T: TokenCodec,
{
    pub fn new(directory: &'a A, sessions: &'a S, hasher: &'a H, tokens: &'a T) -> Self {
        Self {
            directory,
            sessions,
            hasher,
            tokens,
        }
    }

    /// Execute the sign-in use case
    ///
    /// A successful sign-in replaces whatever refresh token the account held
    /// before, so an account has at most one live session.
    ///
    /// # Returns
    /// The freshly minted token pair; its refresh half is already persisted
    #[tracing::instrument(name = "SignInUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<TokenPair, SignInError> {
        let account = self.directory.find_by_email(&email).await?;

        if account.provider() != AuthProvider::Local {
            return Err(SignInError::MismatchPassword);
        }
        if !self
            .hasher
            .verify(&password, account.password_hash())
            .await?
        {
            return Err(SignInError::MismatchPassword);
        }

        let pair = self.tokens.create_pair(account.id(), account.role())?;
        self.sessions
            .update_refresh_token(
                account.id(),
                &pair.refresh_token,
                pair.refresh_token_expires_at,
            )
            .await?;

        tracing::info!(account_id = %account.id(), "Session opened");
        Ok(pair)
    }
}
