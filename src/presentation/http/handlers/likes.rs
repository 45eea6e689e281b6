//! Comment Like Handler

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::application::dto::response::ApiResponse;
use crate::application::use_cases::{AddLikeUseCase, LikeParams};
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// `PUT /threads/{thread_id}/comments/{comment_id}/likes`
///
/// Toggles the caller's like. The response is the same whichever way it
/// flipped.
pub async fn put_like(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let repos = &state.repositories;
    let use_case = AddLikeUseCase::new(
        repos.threads.clone(),
        repos.comments.clone(),
        repos.likes.clone(),
    );

    use_case
        .execute(
            LikeParams {
                thread_id,
                comment_id,
            },
            &auth.user_id,
        )
        .await?;

    Ok(Json(ApiResponse::empty()))
}
