//! Comment Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use axum_extra::extract::WithRejection;

use crate::application::dto::request::PostContentRequest;
use crate::application::dto::response::{AddedCommentData, ApiResponse};
use crate::application::use_cases::{AddCommentUseCase, DeleteCommentParams, DeleteCommentUseCase};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// `POST /threads/{thread_id}/comments`
pub async fn post_comment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(thread_id): Path<String>,
    WithRejection(Json(body), _): WithRejection<Json<PostContentRequest>, AppError>,
) -> Result<(StatusCode, Json<ApiResponse<AddedCommentData>>), AppError> {
    let use_case = AddCommentUseCase::new(
        state.repositories.threads.clone(),
        state.repositories.comments.clone(),
    );

    let added_comment = use_case
        .execute(body.into_comment(thread_id, auth.user_id))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedCommentData { added_comment })),
    ))
}

/// `DELETE /threads/{thread_id}/comments/{comment_id}`
pub async fn delete_comment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let use_case = DeleteCommentUseCase::new(
        state.repositories.threads.clone(),
        state.repositories.comments.clone(),
    );

    use_case
        .execute(
            DeleteCommentParams {
                thread_id,
                comment_id,
            },
            &auth.user_id,
        )
        .await?;

    Ok(Json(ApiResponse::empty()))
}
