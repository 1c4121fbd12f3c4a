use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use warden_application::AuthLifecycle;

use crate::{error::AuthApiError, state::ApiState};

#[tracing::instrument(name = "Refresh", skip_all)]
pub async fn refresh<L>(
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

    let pair = state.auth.refresh_token(token).await?;
    let jar = jar.add(state.cookies.refresh_cookie(pair.refresh_token.clone()));

    Ok((jar, Json(pair)))
}
