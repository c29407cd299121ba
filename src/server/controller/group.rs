use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorsDto},
        group::{CreateGroupDto, GroupDto, MessageInputDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            json::JsonBody,
        },
        model::group::{CreateGroupParam, GroupDetail, MessageParam},
        service::group::GroupService,
        state::AppState,
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

#[utoipa::path(
    get,
    path = "/api/groups",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "All groups", body = Vec<GroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let groups = GroupService::new(&state.db).get_all().await?;

    let dtos: Vec<GroupDto> = groups.into_iter().map(GroupDetail::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group id")),
    responses(
        (status = 200, description = "The group", body = GroupDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let group = GroupService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Group {} not found", id)))?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Create a group with the logged-in user as its first member and admin.
///
/// The body is optional. Without a name the group gets the default one.
///
/// # Returns
/// - `201 Created` - The new group
/// - `400 Bad Request` - Malformed JSON or a name that is too long
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/api/groups",
    tag = GROUP_TAG,
    request_body(content = CreateGroupDto, description = "Optional group name"),
    responses(
        (status = 201, description = "Group created", body = GroupDto),
        (status = 400, description = "Invalid group data", body = ValidationErrorsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    session: Session,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let dto = parse_optional_body(&body)?;
    let param = CreateGroupParam::from_dto(user.id, dto)?;
    let group = GroupService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

/// Delete a group with its memberships and messages.
///
/// # Access Control
/// - `GroupAdmin` - Only an admin of the group
#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group id")),
    responses(
        (status = 204, description = "Group deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::GroupAdmin(id)])
        .await?;

    GroupService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Add a user to the group. Any member may invite.
#[utoipa::path(
    put,
    path = "/api/groups/addUser/{id}/{user_id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group id"),
        ("user_id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Group with its members", body = GroupDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member", body = ErrorDto),
        (status = 404, description = "Group or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_user(
    State(state): State<AppState>,
    session: Session,
    Path((id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::GroupMember(id)])
        .await?;

    let group = GroupService::new(&state.db).add_user(id, user_id).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Remove a user from the group, revoking their admin role as well.
///
/// # Access Control
/// - `GroupAdmin` - Only an admin of the group
///
/// # Returns
/// - `200 OK` - The group without the user
/// - `409 Conflict` - The user is the last admin
#[utoipa::path(
    put,
    path = "/api/groups/removeUser/{id}/{user_id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group id"),
        ("user_id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Group with its members", body = GroupDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Group or user not found", body = ErrorDto),
        (status = 409, description = "Removing the last admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_user(
    State(state): State<AppState>,
    session: Session,
    Path((id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::GroupAdmin(id)])
        .await?;

    let group = GroupService::new(&state.db).remove_user(id, user_id).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Promote a user to admin. A user who is not yet a member is added as one.
#[utoipa::path(
    put,
    path = "/api/groups/addAdmin/{id}/{user_id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group id"),
        ("user_id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Group with its admins", body = GroupDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Group or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_admin(
    State(state): State<AppState>,
    session: Session,
    Path((id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::GroupAdmin(id)])
        .await?;

    let group = GroupService::new(&state.db).add_admin(id, user_id).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/groups/removeAdmin/{id}/{user_id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group id"),
        ("user_id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Group with its admins", body = GroupDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Group or user not found", body = ErrorDto),
        (status = 409, description = "Removing the last admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_admin(
    State(state): State<AppState>,
    session: Session,
    Path((id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::GroupAdmin(id)])
        .await?;

    let group = GroupService::new(&state.db)
        .remove_admin(id, user_id)
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Post a message to the group as the logged-in member.
#[utoipa::path(
    put,
    path = "/api/groups/message/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group id")),
    request_body = MessageInputDto,
    responses(
        (status = 201, description = "Message posted", body = GroupDto),
        (status = 400, description = "Invalid message", body = ValidationErrorsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not a member", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_message(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    JsonBody(payload): JsonBody<MessageInputDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::GroupMember(id)])
        .await?;

    let param = MessageParam::from_dto(payload)?;
    let group = GroupService::new(&state.db)
        .post_message(id, user.id, param)
        .await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

/// An empty body means "no options".
fn parse_optional_body(body: &[u8]) -> Result<CreateGroupDto, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CreateGroupDto::default());
    }

    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(format!("Invalid JSON: {}", e)))
}
