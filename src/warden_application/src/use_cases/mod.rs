pub mod refresh_token;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;
pub mod withdraw_account;

pub use refresh_token::{RefreshTokenError, RefreshTokenUseCase};
pub use sign_in::{SignInError, SignInUseCase};
pub use sign_out::{SignOutError, SignOutUseCase};
pub use sign_up::{SignUpError, SignUpUseCase};
pub use withdraw_account::{WithdrawAccountError, WithdrawAccountUseCase, WithdrawalOutcome};
