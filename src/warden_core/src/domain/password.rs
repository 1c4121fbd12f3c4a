use secrecy::{ExposeSecret, Secret};

use super::account::AccountError;

// Bounds the work handed to the hasher for a single request.
const MAX_PASSWORD_LENGTH: usize = 128;

/// A plaintext password as submitted by a user. Only ever handed to a
/// `PasswordHasher`; it is never stored.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(raw: &str) -> Result<Self, AccountError> {
        Self::try_from(Secret::from(raw.to_owned()))
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = AccountError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        let candidate = value.expose_secret();
        if candidate.trim().is_empty() || candidate.chars().count() > MAX_PASSWORD_LENGTH {
            return Err(AccountError::InvalidPassword);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.0.expose_secret() == other.0.expose_secret()
    }
}
