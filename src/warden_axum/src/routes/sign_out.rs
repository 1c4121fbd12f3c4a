use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use warden_application::AuthLifecycle;

use crate::{error::AuthApiError, state::ApiState};

#[tracing::instrument(name = "Sign out", skip_all)]
pub async fn sign_out<L>(
    State(state): State<ApiState<L>>,
    jar: CookieJar,
) -> Result<impl IntoResponse, AuthApiError>
where
    L: AuthLifecycle,
{
    let token = state
        .cookies
        .extract(&jar)
        .ok_or(AuthApiError::Unauthorized)?;

    state.auth.sign_out(token).await?;
    let jar = jar.add(state.cookies.removal_cookie());

    Ok((
        StatusCode::OK,
        jar,
        Json(serde_json::json!({ "message": "Signed out" })),
    ))
}
