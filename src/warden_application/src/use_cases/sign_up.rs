use warden_core::{
    Account, AccountDirectory, AccountStoreError, Email, Password, PasswordHasher,
    PasswordHasherError,
};

/// Error types for sign-up use case
#[derive(Debug, thiserror::Error)]
pub enum SignUpError {
    #[error("Account already registered")]
    AlreadyRegistered,
    #[error("Account store error: {0}")]
    AccountStoreError(AccountStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

impl From<AccountStoreError> for SignUpError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            // A concurrent sign-up can slip past the existence check; the
            // store's uniqueness rule is the final word.
            AccountStoreError::AlreadyExists => SignUpError::AlreadyRegistered,
            other => SignUpError::AccountStoreError(other),
        }
    }
}

/// Sign-up use case - registers a local account
pub struct SignUpUseCase<'a, A, H>
where
    A: AccountDirectory,
    H: PasswordHasher,
{
    directory: &'a A,
    hasher: &'a H,
}

impl<'a, A, H> SignUpUseCase<'a, A, H>
where
    A: AccountDirectory,
    H: PasswordHasher,
{
    pub fn new(directory: &'a A, hasher: &'a H) -> Self {
        Self { directory, hasher }
    }

    /// Execute the sign-up use case
    ///
    /// # Arguments
    /// * `email` - Validated email address, must not be registered yet
    /// * `password` - Validated plaintext password, hashed before storage
    ///
    /// # Returns
    /// The created account (role `USER`, provider `local`, no session)
    #[tracing::instrument(name = "SignUpUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<Account, SignUpError> {
        if self.directory.exists_by_email(&email).await? {
            return Err(SignUpError::AlreadyRegistered);
        }

        let password_hash = self.hasher.hash(&password).await?;
        let account = self
            .directory
            .create(Account::new_local(email, password_hash))
            .await?;

        tracing::info!(account_id = %account.id(), "Account registered");
        Ok(account)
    }
}
