//! Reply Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use axum_extra::extract::WithRejection;

use crate::application::dto::request::PostContentRequest;
use crate::application::dto::response::{AddedReplyData, ApiResponse};
use crate::application::use_cases::{AddReplyUseCase, DeleteReplyParams, DeleteReplyUseCase};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// `POST /threads/{thread_id}/comments/{comment_id}/replies`
pub async fn post_reply(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    WithRejection(Json(body), _): WithRejection<Json<PostContentRequest>, AppError>,
) -> Result<(StatusCode, Json<ApiResponse<AddedReplyData>>), AppError> {
    let repos = &state.repositories;
    let use_case = AddReplyUseCase::new(
        repos.threads.clone(),
        repos.comments.clone(),
        repos.replies.clone(),
    );

    let added_reply = use_case
        .execute(body.into_reply(thread_id, comment_id, auth.user_id))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedReplyData { added_reply })),
    ))
}

/// `DELETE /threads/{thread_id}/comments/{comment_id}/replies/{reply_id}`
pub async fn delete_reply(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let repos = &state.repositories;
    let use_case = DeleteReplyUseCase::new(
        repos.threads.clone(),
        repos.comments.clone(),
        repos.replies.clone(),
    );

    use_case
        .execute(
            DeleteReplyParams {
                thread_id,
                comment_id,
                reply_id,
            },
            &auth.user_id,
        )
        .await?;

    Ok(Json(ApiResponse::empty()))
}
