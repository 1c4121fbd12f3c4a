pub mod auth_service;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use auth_service::{AuthError, AuthLifecycle, AuthService};
pub use use_cases::{
    RefreshTokenError, RefreshTokenUseCase, SignInError, SignInUseCase, SignOutError,
    SignOutUseCase, SignUpError, SignUpUseCase, WithdrawAccountError, WithdrawAccountUseCase,
    WithdrawalOutcome,
};
