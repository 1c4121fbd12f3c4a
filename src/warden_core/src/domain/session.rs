use super::account::{AccountId, Role};

/// The principal resolved from a request's access token. Lives for one request
/// and is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignInSession {
    pub account_id: AccountId,
    pub role: Role,
}

impl SignInSession {
    pub fn new(account_id: AccountId, role: Role) -> Self {
        Self { account_id, role }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
