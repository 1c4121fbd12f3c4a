pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{Account, AccountError, AccountId, AuthProvider, HashedPassword, Role},
    email::Email,
    ownership::{OwnershipDecision, OwnershipGuard},
    password::Password,
    session::SignInSession,
    token::{GRANT_TYPE_BEARER, TokenPair, TokenType},
};

pub use ports::{
    repositories::{AccountDirectory, AccountStoreError, SessionStore, SessionStoreError},
    services::{Clock, PasswordHasher, PasswordHasherError, TokenCodec, TokenCodecError},
};
