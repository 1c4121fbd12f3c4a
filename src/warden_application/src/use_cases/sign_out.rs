use warden_core::{Clock, SessionStore, SessionStoreError, TokenCodec};

#[derive(Debug, thiserror::Error)]
pub enum SignOutError {
    #[error("Invalid refresh token")]
    InvalidRefreshToken,
    #[error("Refresh token is not the current one")]
    NotFound,
    #[error("Session store error: {0}")]
    SessionStoreError(SessionStoreError),
}

impl From<SessionStoreError> for SignOutError {
    fn from(error: SessionStoreError) -> Self {
        match error {
            SessionStoreError::NotFound => SignOutError::NotFound,
            other => SignOutError::SessionStoreError(other),
        }
    }
}

/// Sign-out use case - revokes the current refresh token
pub struct SignOutUseCase<'a, S, T, C>
where
    S: SessionStore,
    T: TokenCodec,
    C: Clock,
{
    sessions: &'a S,
    tokens: &'a T,
    clock: &'a C,
}

impl<'a, S, T, C> SignOutUseCase<'a, S, T, C>
where
    S: SessionStore,
    T: TokenCodec,
    C: Clock,
{
    pub fn new(sessions: &'a S, tokens: &'a T, clock: &'a C) -> Self {
        Self {
            sessions,
            tokens,
            clock,
        }
    }

    /// Clears the stored refresh token. Outstanding access tokens stay valid
    /// until they expire on their own.
    #[tracing::instrument(name = "SignOutUseCase::execute", skip_all)]
    pub async fn execute(&self, refresh_token: &str) -> Result<(), SignOutError> {
        if !self.tokens.validate(refresh_token) {
            return Err(SignOutError::InvalidRefreshToken);
        }

        let account = self.sessions.find_by_refresh_token(refresh_token).await?;
        self.sessions
            .replace_refresh_token(account.id(), refresh_token, "", self.clock.now())
            .await?;

        tracing::info!(account_id = %account.id(), "Session closed");
        Ok(())
    }
}
