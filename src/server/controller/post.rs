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
        post::{PostDto, PostInputDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::JsonBody,
        },
        model::post::{PostContentParam, PostDetail, PostView},
        service::post::PostService,
        state::AppState,
    },
};

/// Tag for grouping post endpoints in OpenAPI documentation
pub static POST_TAG: &str = "post";

/// List all posts with their likes, comments and poll.
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = POST_TAG,
    responses(
        (status = 200, description = "All posts", body = Vec<PostDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let posts = PostService::new(&state.db).get_all().await?;

    let dtos: Vec<PostDto> = posts
        .into_iter()
        .map(|p| p.into_dto(PostView::Full))
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get one post with its likes, comments and poll.
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post", body = PostDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let post = PostService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))?;

    Ok((StatusCode::OK, Json(post.into_dto(PostView::Full))))
}

/// Publish a post as the given user.
///
/// The path names the author, who must be the logged-in user. The publication time is
/// set by the server.
///
/// # Access Control
/// - `SelfUser` - The author must be the caller
///
/// # Returns
/// - `201 Created` - The new post with likes and comments
/// - `400 Bad Request` - Invalid content
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Posting as someone else
/// - `404 Not Found` - The author does not exist
#[utoipa::path(
    post,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Author user id")),
    request_body = PostInputDto,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 400, description = "Invalid post data", body = ValidationErrorsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Posting as another user", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_post(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
    JsonBody(payload): JsonBody<PostInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfUser(user_id)])
        .await?;

    let param = PostContentParam::from_dto(payload)?;
    let post = PostService::new(&state.db).create(user_id, param).await?;

    Ok((StatusCode::CREATED, Json(post.into_dto(PostView::Interactions))))
}

/// Replace a post's content and image.
///
/// # Access Control
/// - `PostAuthor` - Only the author
#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post id")),
    request_body = PostInputDto,
    responses(
        (status = 200, description = "Post updated", body = PostDto),
        (status = 400, description = "Invalid post data", body = ValidationErrorsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_post(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<PostInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::PostAuthor(id)])
        .await?;

    let param = PostContentParam::from_dto(payload)?;
    let post = PostService::new(&state.db).update(id, param).await?;

    Ok((StatusCode::OK, Json(post.into_dto(PostView::Interactions))))
}

/// Delete a post with its comments, likes and poll.
///
/// # Access Control
/// - `PostAuthor` - Only the author
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post id")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::PostAuthor(id)])
        .await?;

    PostService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Like a post as the given user. Liking twice keeps one like.
///
/// # Access Control
/// - `SelfUser` - The liker must be the caller
#[utoipa::path(
    put,
    path = "/api/posts/addLike/{id}/{user_id}",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Post id"),
        ("user_id" = i32, Path, description = "Liking user id")
    ),
    responses(
        (status = 200, description = "Post with its likes", body = PostDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Liking as another user", body = ErrorDto),
        (status = 404, description = "Post or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_like(
    State(state): State<AppState>,
    session: Session,
    Path((id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfUser(user_id)])
        .await?;

    let post = PostService::new(&state.db).add_like(id, user_id).await?;

    Ok(interactions(post))
}

/// Remove the given user's like. Removing a missing like is a no-op.
///
/// # Access Control
/// - `SelfUser` - The liker must be the caller
#[utoipa::path(
    put,
    path = "/api/posts/removeLike/{id}/{user_id}",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Post id"),
        ("user_id" = i32, Path, description = "Liking user id")
    ),
    responses(
        (status = 200, description = "Post with its likes", body = PostDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Unliking as another user", body = ErrorDto),
        (status = 404, description = "Post or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_like(
    State(state): State<AppState>,
    session: Session,
    Path((id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfUser(user_id)])
        .await?;

    let post = PostService::new(&state.db).remove_like(id, user_id).await?;

    Ok(interactions(post))
}

/// Attach one of the caller's events to their post.
///
/// A post carries at most one event and an event belongs to at most one post.
///
/// # Access Control
/// - `PostAuthor` - Only the post author
/// - The event must be owned by the author as well
///
/// Checks run in this order: post exists, caller wrote it, post has no event yet, event
/// exists, caller owns it, event is not attached elsewhere.
///
/// # Returns
/// - `200 OK` - The post with its event
/// - `403 Forbidden` - Not the post author, or the event belongs to someone else
/// - `404 Not Found` - Post or event not found
/// - `409 Conflict` - The post already has an event, or the event is attached elsewhere
#[utoipa::path(
    put,
    path = "/api/posts/addEvent/{id}/{event_id}",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Post id"),
        ("event_id" = i32, Path, description = "Event id")
    ),
    responses(
        (status = 200, description = "Post with its event", body = PostDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the owner of the post or event", body = ErrorDto),
        (status = 404, description = "Post or event not found", body = ErrorDto),
        (status = 409, description = "Post or event already attached", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_event(
    State(state): State<AppState>,
    session: Session,
    Path((id, event_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::PostAuthor(id)])
        .await?;

    let post = PostService::new(&state.db)
        .attach_event(id, event_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(post.into_dto(PostView::Event))))
}

/// Detach the event from a post. The event itself is kept.
///
/// # Access Control
/// - `PostAuthor` - Only the post author
#[utoipa::path(
    put,
    path = "/api/posts/removeEvent/{id}",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post without event", body = PostDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 409, description = "Post has no event", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::PostAuthor(id)])
        .await?;

    let post = PostService::new(&state.db).detach_event(id).await?;

    Ok((StatusCode::OK, Json(post.into_dto(PostView::Event))))
}

fn interactions(post: PostDetail) -> (StatusCode, Json<PostDto>) {
    (StatusCode::OK, Json(post.into_dto(PostView::Interactions)))
}
