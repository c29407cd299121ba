use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorsDto},
        comment::{CommentDto, CommentInputDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::JsonBody,
        },
        model::comment::{CommentContentParam, CommentDetail},
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

#[utoipa::path(
    get,
    path = "/api/comments",
    tag = COMMENT_TAG,
    responses(
        (status = 200, description = "All comments", body = Vec<CommentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db).get_all().await?;

    let dtos: Vec<CommentDto> = comments.into_iter().map(CommentDetail::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment id")),
    responses(
        (status = 200, description = "The comment", body = CommentDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comment = CommentService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Comment {} not found", id)))?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Comment on a post as the logged-in user.
#[utoipa::path(
    post,
    path = "/api/comments/new/{post_id}",
    tag = COMMENT_TAG,
    params(("post_id" = i32, Path, description = "Post id")),
    request_body = CommentInputDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Invalid comment data", body = ValidationErrorsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
    JsonBody(payload): JsonBody<CommentInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = CommentContentParam::from_dto(payload)?;
    let comment = CommentService::new(&state.db)
        .create(post_id, user.id, param)
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Replace a comment's message and image. Only its author may do so.
#[utoipa::path(
    put,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment id")),
    request_body = CommentInputDto,
    responses(
        (status = 200, description = "Comment updated", body = CommentDto),
        (status = 400, description = "Invalid comment data", body = ValidationErrorsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<CommentInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CommentAuthor(id)])
        .await?;

    let param = CommentContentParam::from_dto(payload)?;
    let comment = CommentService::new(&state.db).update(id, param).await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Delete a comment. Only its author may do so.
#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment id")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::CommentAuthor(id)])
        .await?;

    CommentService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
