//! Thread Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use axum_extra::extract::WithRejection;

use crate::application::dto::request::PostThreadRequest;
use crate::application::dto::response::{AddedThreadData, ApiResponse, ThreadData};
use crate::application::use_cases::{AddThreadUseCase, GetDetailThreadUseCase};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// `POST /threads`
pub async fn post_thread(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    WithRejection(Json(body), _): WithRejection<Json<PostThreadRequest>, AppError>,
) -> Result<(StatusCode, Json<ApiResponse<AddedThreadData>>), AppError> {
    let use_case = AddThreadUseCase::new(state.repositories.threads.clone());

    let added_thread = use_case.execute(body.into_payload(auth.user_id)).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedThreadData { added_thread })),
    ))
}

/// `GET /threads/{thread_id}`
pub async fn get_thread(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> Result<Json<ApiResponse<ThreadData>>, AppError> {
    let repos = &state.repositories;
    let use_case = GetDetailThreadUseCase::new(
        repos.threads.clone(),
        repos.comments.clone(),
        repos.replies.clone(),
        repos.likes.clone(),
    );

    let thread = use_case.execute(&thread_id).await?;

    Ok(Json(ApiResponse::success(ThreadData { thread })))
}
