//! Axum integration for the warden account and session lifecycle.
//!
//! Handlers are generic over [`AuthLifecycle`](warden_application::AuthLifecycle)
//! and share an [`ApiState`]. The refresh token only ever travels in an
//! HTTP-only cookie; access tokens are presented as `Authorization: Bearer`.

pub mod cookies;
pub mod error;
pub mod extractor;
pub mod routes;
pub mod state;

pub use cookies::RefreshCookieConfig;
pub use error::{AuthApiError, ErrorResponse};
pub use extractor::Authenticated;
pub use state::ApiState;
