use warden_core::{AccountDirectory, AccountId, AccountStoreError, OwnershipGuard, SignInSession};

#[derive(Debug, thiserror::Error)]
pub enum WithdrawAccountError {
    #[error("Access denied")]
    AccessDenied,
    #[error("Account not found")]
    NotFound,
    #[error("Account store error: {0}")]
    AccountStoreError(AccountStoreError),
}

impl From<AccountStoreError> for WithdrawAccountError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::NotFound => WithdrawAccountError::NotFound,
            other => WithdrawAccountError::AccountStoreError(other),
        }
    }
}

/// What the transport has to do once an account is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithdrawalOutcome {
    /// The caller removed their own account and still holds its refresh cookie.
    pub clear_session_cookie: bool,
}

pub struct WithdrawAccountUseCase<'a, A>
where
    A: AccountDirectory,
{
    directory: &'a A,
}

impl<'a, A> WithdrawAccountUseCase<'a, A>
where
    A: AccountDirectory,
{
    pub fn new(directory: &'a A) -> Self {
        Self { directory }
    }

    /// Deletes `target` on behalf of `session`.
    ///
    /// Owners may remove themselves, admins may remove anyone.
    #[tracing::instrument(
        name = "WithdrawAccountUseCase::execute",
        skip_all,
        fields(acting = %session.account_id, target_id = %target)
    )]
    pub async fn execute(
        &self,
        session: &SignInSession,
        target: &AccountId,
    ) -> Result<WithdrawalOutcome, WithdrawAccountError> {
        let ownership = OwnershipGuard::authorize(&session.account_id, target);
        if !ownership.is_allowed() && !session.is_admin() {
            return Err(WithdrawAccountError::AccessDenied);
        }

        self.directory.delete_by_id(target).await?;

        tracing::info!("Account withdrawn");
        Ok(WithdrawalOutcome {
            clear_session_cookie: ownership.is_allowed(),
        })
    }
}
