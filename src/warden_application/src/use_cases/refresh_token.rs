use warden_core::{SessionStore, SessionStoreError, TokenCodec, TokenCodecError, TokenPair};

#[derive(Debug, thiserror::Error)]
pub enum RefreshTokenError {
    #[error("Invalid refresh token")]
    InvalidRefreshToken,
    #[error("Refresh token is not the current one")]
    NotFound,
    #[error("Session store error: {0}")]
    SessionStoreError(SessionStoreError),
    #[error("Token error: {0}")]
    TokenCodecError(#[from] TokenCodecError),
}

impl From<SessionStoreError> for RefreshTokenError {
    fn from(error: SessionStoreError) -> Self {
        match error {
            SessionStoreError::NotFound => RefreshTokenError::NotFound,
            other => RefreshTokenError::SessionStoreError(other),
        }
    }
}

/// Refresh use case - rotates a session's refresh token
pub struct RefreshTokenUseCase<'a, S, T>
where
    S: SessionStore,
    T: TokenCodec,
{
    sessions: &'a S,
    tokens: &'a T,
}

impl<'a, S, T> RefreshTokenUseCase<'a, S, T>
where
    S: SessionStore,
    T: TokenCodec,
{
    pub fn new(sessions: &'a S, tokens: &'a T) -> Self {
        Self { sessions, tokens }
    }

    /// Exchanges the current refresh token for a new pair.
    ///
    /// The presented token is consumed: once this returns `Ok`, it no longer
    /// matches the stored value and every later attempt fails with `NotFound`.
    #[tracing::instrument(name = "RefreshTokenUseCase::execute", skip_all)]
    pub async fn execute(&self, refresh_token: &str) -> Result<TokenPair, RefreshTokenError> {
        if !self.tokens.validate(refresh_token) {
            return Err(RefreshTokenError::InvalidRefreshToken);
        }

        let account = self.sessions.find_by_refresh_token(refresh_token).await?;
        let pair = self.tokens.create_pair(account.id(), account.role())?;

        // Compare-and-swap on the stored value; a concurrent refresh with the
        // same token loses here.
        self.sessions
            .replace_refresh_token(
                account.id(),
                refresh_token,
                &pair.refresh_token,
                pair.refresh_token_expires_at,
            )
            .await?;

        tracing::info!(account_id = %account.id(), "Refresh token rotated");
        Ok(pair)
    }
}
