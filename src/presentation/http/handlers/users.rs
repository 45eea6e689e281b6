//! User Registration Handler

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::WithRejection;

use crate::application::dto::request::RegisterUserRequest;
use crate::application::dto::response::{AddedUserData, ApiResponse};
use crate::application::use_cases::AddUserUseCase;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// `POST /users`
pub async fn post_user(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<RegisterUserRequest>, AppError>,
) -> Result<(StatusCode, Json<ApiResponse<AddedUserData>>), AppError> {
    let use_case = AddUserUseCase::new(
        state.repositories.users.clone(),
        state.password_hash.clone(),
    );

    let added_user = use_case.execute(body.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedUserData { added_user })),
    ))
}
