use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use warden_application::AuthLifecycle;
use warden_core::{GRANT_TYPE_BEARER, SignInSession};

use crate::{error::AuthApiError, state::ApiState};

/// The caller behind a valid `Authorization: Bearer <access token>` header.
#[derive(Debug, Clone, Copy)]
pub struct Authenticated(pub SignInSession);

impl<L: AuthLifecycle> FromRequestParts<ApiState<L>> for Authenticated {
    type Rejection = AuthApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ApiState<L>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(AuthApiError::Unauthorized)?;
        let session = state.auth.resolve_session(token)?;
        Ok(Self(session))
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case(GRANT_TYPE_BEARER) && !token.is_empty()).then_some(token)
}
