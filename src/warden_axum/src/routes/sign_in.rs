use axum::{Json, extract::State, response::IntoResponse};
use axum_extra::extract::CookieJar;
use warden_application::AuthLifecycle;

use super::CredentialsRequest;
use crate::{error::AuthApiError, state::ApiState};

/// Returns the token pair as JSON and sets the refresh cookie.
#[tracing::instrument(name = "Sign in", skip_all)]
pub async fn sign_in<L>(
    State(state): State<ApiState<L>>,
    jar: CookieJar,
    Json(request): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    L: AuthLifecycle,
{
    let (email, password) = request.parse()?;

    let pair = state.auth.sign_in(email, password).await?;
    let jar = jar.add(state.cookies.refresh_cookie(pair.refresh_token.clone()));

    Ok((jar, Json(pair)))
}
