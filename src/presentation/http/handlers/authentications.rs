//! Authentication Handler

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;

use crate::application::dto::request::LoginRequest;
use crate::application::dto::response::{AccessTokenData, ApiResponse};
use crate::application::use_cases::LoginUserUseCase;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// `POST /authentications`
pub async fn post_authentication(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<LoginRequest>, AppError>,
) -> Result<(StatusCode, Json<ApiResponse<AccessTokenData>>), AppError> {
    let use_case = LoginUserUseCase::new(
        state.repositories.users.clone(),
        state.password_hash.clone(),
        state.tokens.clone(),
    );

    let access_token = use_case.execute(body.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AccessTokenData { access_token })),
    ))
}
