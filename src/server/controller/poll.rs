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
        poll::{PollChoiceInputDto, PollDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::JsonBody,
        },
        model::poll::{PollChoiceParam, PollDetail},
        service::poll::PollService,
        state::AppState,
    },
};

/// Tag for grouping poll endpoints in OpenAPI documentation
pub static POLL_TAG: &str = "poll";

#[utoipa::path(
    get,
    path = "/api/polls",
    tag = POLL_TAG,
    responses(
        (status = 200, description = "All polls with their votes", body = Vec<PollDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_polls(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let polls = PollService::new(&state.db).get_all().await?;

    let dtos: Vec<PollDto> = polls.into_iter().map(PollDetail::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/polls/{id}",
    tag = POLL_TAG,
    params(("id" = i32, Path, description = "Poll id")),
    responses(
        (status = 200, description = "The poll with its votes", body = PollDto),
        (status = 404, description = "Poll not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_poll(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let poll = PollService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Poll {} not found", id)))?;

    Ok((StatusCode::OK, Json(poll.into_dto())))
}

/// Attach an empty poll to a post.
///
/// # Access Control
/// - `PostAuthor` - Only the post author
///
/// # Returns
/// - `201 Created` - The new poll
/// - `404 Not Found` - Post not found
/// - `409 Conflict` - The post already has a poll
#[utoipa::path(
    post,
    path = "/api/polls/{id}",
    tag = POLL_TAG,
    params(("id" = i32, Path, description = "Post id the poll is attached to")),
    responses(
        (status = 201, description = "Poll created", body = PollDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the post author", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 409, description = "Post already has a poll", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_poll(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::PostAuthor(post_id)])
        .await?;

    let poll = PollService::new(&state.db).create(post_id).await?;

    Ok((StatusCode::CREATED, Json(poll.into_dto())))
}

/// Delete a poll with its choices and votes.
///
/// # Access Control
/// - `PollOwner` - Only the author of the poll's post
#[utoipa::path(
    delete,
    path = "/api/polls/{id}",
    tag = POLL_TAG,
    params(("id" = i32, Path, description = "Poll id")),
    responses(
        (status = 204, description = "Poll deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the poll owner", body = ErrorDto),
        (status = 404, description = "Poll not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_poll(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::PollOwner(id)])
        .await?;

    PollService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/polls/addPollChoice/{id}",
    tag = POLL_TAG,
    params(("id" = i32, Path, description = "Poll id")),
    request_body = PollChoiceInputDto,
    responses(
        (status = 200, description = "Poll with the new choice", body = PollDto),
        (status = 400, description = "Invalid choice", body = ValidationErrorsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the poll owner", body = ErrorDto),
        (status = 404, description = "Poll not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_choice(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<PollChoiceInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::PollOwner(id)])
        .await?;

    let param = PollChoiceParam::from_dto(payload)?;
    let poll = PollService::new(&state.db).add_choice(id, param).await?;

    Ok((StatusCode::OK, Json(poll.into_dto())))
}

/// Remove a choice and the votes cast for it.
#[utoipa::path(
    put,
    path = "/api/polls/removePollChoice/{id}/{choice_id}",
    tag = POLL_TAG,
    params(
        ("id" = i32, Path, description = "Poll id"),
        ("choice_id" = i32, Path, description = "Choice id")
    ),
    responses(
        (status = 200, description = "Poll without the choice", body = PollDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the poll owner", body = ErrorDto),
        (status = 404, description = "Poll or choice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_choice(
    State(state): State<AppState>,
    session: Session,
    Path((id, choice_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::PollOwner(id)])
        .await?;

    let poll = PollService::new(&state.db)
        .remove_choice(id, choice_id)
        .await?;

    Ok((StatusCode::OK, Json(poll.into_dto())))
}

/// Vote for a choice as the logged-in user.
///
/// A user holds at most one vote per poll, so voting again moves the vote.
#[utoipa::path(
    put,
    path = "/api/polls/vote/{id}/{choice_id}",
    tag = POLL_TAG,
    params(
        ("id" = i32, Path, description = "Poll id"),
        ("choice_id" = i32, Path, description = "Choice id")
    ),
    responses(
        (status = 200, description = "Poll with the vote", body = PollDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Poll or choice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn vote(
    State(state): State<AppState>,
    session: Session,
    Path((id, choice_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let poll = PollService::new(&state.db)
        .vote(id, choice_id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(poll.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/polls/unvote/{id}",
    tag = POLL_TAG,
    params(("id" = i32, Path, description = "Poll id")),
    responses(
        (status = 200, description = "Poll without the vote", body = PollDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Poll not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unvote(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let poll = PollService::new(&state.db).unvote(id, user.id).await?;

    Ok((StatusCode::OK, Json(poll.into_dto())))
}
