use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use axum_extra::extract::CookieJar;
use warden_application::{AuthError, AuthLifecycle};
use warden_core::AccountId;

use crate::{error::AuthApiError, extractor::Authenticated, state::ApiState};

/// Deletes a member. The refresh cookie is cleared only when callers remove
/// their own account.
#[tracing::instrument(name = "Withdraw member", skip_all, fields(member_id = %id))]
pub async fn withdraw_member<L>(
    State(state): State<ApiState<L>>,
    Authenticated(session): Authenticated,
    jar: CookieJar,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AuthApiError>
where
    L: AuthLifecycle,
{
    let target = AccountId::parse(&id)?;

    let outcome = state
        .auth
        .withdraw_account(&session, &target)
        .await
        .map_err(|error| match error {
            AuthError::NotFound => AuthApiError::MemberNotFound,
            other => other.into(),
        })?;

    let jar = if outcome.clear_session_cookie {
        jar.add(state.cookies.removal_cookie())
    } else {
        jar
    };

    Ok((
        StatusCode::OK,
        jar,
        Json(serde_json::json!({ "message": "Account withdrawn" })),
    ))
}
