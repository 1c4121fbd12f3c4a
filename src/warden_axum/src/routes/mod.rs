//! Axum route handlers.
//!
//! Each handler parses its input, calls the lifecycle and maps the result
//! (and any refresh cookie change) onto the response.

pub mod refresh;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;
pub mod withdraw_member;

pub use refresh::refresh;
pub use sign_in::sign_in;
pub use sign_out::sign_out;
pub use sign_up::sign_up;
pub use withdraw_member::withdraw_member;

use secrecy::Secret;
use serde::Deserialize;
use warden_core::{Email, Password};

use crate::error::AuthApiError;

/// Email and password as submitted by sign-up and sign-in.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

impl CredentialsRequest {
    fn parse(self) -> Result<(Email, Password), AuthApiError> {
        let email = Email::try_from(self.email)?;
        let password = Password::try_from(self.password)?;
        Ok((email, password))
    }
}
