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
        event::{EventDto, EventInputDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::JsonBody,
        },
        model::event::{EventDetail, EventParam},
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    responses(
        (status = 200, description = "All events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let events = EventService::new(&state.db).get_all().await?;

    let dtos: Vec<EventDto> = events.into_iter().map(EventDetail::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "The event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Create an event owned by the logged-in user.
///
/// # Returns
/// - `201 Created` - The new event
/// - `400 Bad Request` - A blank title or description, or a missing date
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = EventInputDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Invalid event data", body = ValidationErrorsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    JsonBody(payload): JsonBody<EventInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let param = EventParam::from_dto(payload)?;
    let event = EventService::new(&state.db).create(user.id, param).await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// Replace an event's fields. Only the owner may do so.
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    request_body = EventInputDto,
    responses(
        (status = 200, description = "Event updated", body = EventDto),
        (status = 400, description = "Invalid event data", body = ValidationErrorsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<EventInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::EventOwner(id)])
        .await?;

    let param = EventParam::from_dto(payload)?;
    let event = EventService::new(&state.db).update(id, param).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Delete an event. A post the event is attached to is deleted with it.
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::EventOwner(id)])
        .await?;

    EventService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a user to the event's members. Adding an existing member changes nothing.
#[utoipa::path(
    put,
    path = "/api/events/addMember/{id}/{user_id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event id"),
        ("user_id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Event with its members", body = EventDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Event or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_member(
    State(state): State<AppState>,
    session: Session,
    Path((id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::EventOwner(id)])
        .await?;

    let event = EventService::new(&state.db).add_member(id, user_id).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/events/removeMember/{id}/{user_id}",
    tag = EVENT_TAG,
    params(
        ("id" = i32, Path, description = "Event id"),
        ("user_id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Event with its members", body = EventDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Event or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_member(
    State(state): State<AppState>,
    session: Session,
    Path((id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::EventOwner(id)])
        .await?;

    let event = EventService::new(&state.db)
        .remove_member(id, user_id)
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}
