//! # Warden - account and session lifecycle
//!
//! Facade crate that re-exports the public APIs of the warden components:
//! sign-up, sign-in with an access/refresh token pair, refresh-token rotation,
//! sign-out, and member withdrawal.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Account`, `TokenPair`, `SignInSession`
//! - **Ports**: `AccountDirectory`, `SessionStore`, `PasswordHasher`, `TokenCodec`, `Clock`
//! - **Use cases**: `SignUpUseCase`, `SignInUseCase`, `RefreshTokenUseCase`, ...
//! - **Adapters**: `HashMapAccountStore`, `PostgresAccountStore`, `JwtTokenCodec`, ...
//! - **Server**: `AuthServer` mounts the HTTP routes

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use warden_core::*;
}

pub use warden_core::{
    Account, AccountError, AccountId, AuthProvider, Email, OwnershipDecision, OwnershipGuard,
    Password, Role, SignInSession, TokenPair,
};

// ============================================================================
// Ports
// ============================================================================

pub use warden_core::{
    AccountDirectory, AccountStoreError, Clock, PasswordHasher, PasswordHasherError, SessionStore,
    SessionStoreError, TokenCodec, TokenCodecError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use warden_application::use_cases::*;
}

pub use warden_application::{AuthError, AuthLifecycle, AuthService, WithdrawalOutcome};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use warden_adapters::persistence::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use warden_adapters::hashing::*;
    }

    /// Token minting and validation
    pub mod token {
        pub use warden_adapters::token::*;
    }

    /// Configuration
    pub mod config {
        pub use warden_adapters::config::*;
    }
}

pub use warden_adapters::{
    Argon2PasswordHasher, HashMapAccountStore, JwtConfig, JwtTokenCodec, PostgresAccountStore,
    SystemClock,
};

// ============================================================================
// HTTP
// ============================================================================

/// Axum routes, extractor and error mapping
pub mod http {
    pub use warden_axum::*;
}

pub use warden_auth_service::{AuthServer, configure_postgresql, refresh_cookie_config};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
