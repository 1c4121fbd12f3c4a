use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use warden_application::AuthLifecycle;

use super::CredentialsRequest;
use crate::{error::AuthApiError, state::ApiState};

#[tracing::instrument(name = "Sign up", skip_all)]
pub async fn sign_up<L>(
    State(state): State<ApiState<L>>,
    Json(request): Json<CredentialsRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    L: AuthLifecycle,
{
    let (email, password) = request.parse()?;

    state.auth.sign_up(email, password).await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "message": "Account created successfully" })),
    ))
}
