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
        user::{RegisterUserDto, UserDto, UserSummaryDto},
    },
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::{AuthGuard, Permission},
            json::JsonBody,
            session::AuthSession,
        },
        model::user::{RegisterUserParam, User},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all users.
///
/// Public, so only ids and names are returned.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserSummaryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    let dtos: Vec<UserSummaryDto> = users.iter().map(User::to_summary_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get one user.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = UserSummaryDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    Ok((StatusCode::OK, Json(user.to_summary_dto())))
}

/// Register a new account.
///
/// Only anonymous callers may register. The password is hashed before it is stored and
/// never returned.
///
/// # Returns
/// - `201 Created` - The new user
/// - `400 Bad Request` - Field violations, including an email that is already used
/// - `403 Forbidden` - The caller is already logged in
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 400, description = "Invalid registration data", body = ValidationErrorsDto),
        (status = 403, description = "Already logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    JsonBody(payload): JsonBody<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    if AuthSession::new(&session).is_authenticated().await? {
        return Err(AuthError::AlreadyAuthenticated.into());
    }

    let param = RegisterUserParam::from_dto(payload)?;
    let user = UserService::new(&state.db).register(param).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Delete the caller's own account.
///
/// Everything the user authored or owns goes with the account, and the session is
/// cleared.
///
/// # Access Control
/// - `SelfUser` - Only the user themselves
///
/// # Returns
/// - `204 No Content` - Account deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Another user's account
/// - `404 Not Found` - No such user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not the caller's account", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfUser(id)])
        .await?;

    UserService::new(&state.db).delete(id).await?;
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Accounts cannot be edited. Both `PUT` and `PATCH` always answer `403 Forbidden`.
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses((status = 403, description = "Accounts cannot be edited", body = ErrorDto)),
)]
pub async fn replace_user(
    session: Session,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    deny_edit(&session, id).await
}

/// Accounts cannot be edited. Both `PUT` and `PATCH` always answer `403 Forbidden`.
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses((status = 403, description = "Accounts cannot be edited", body = ErrorDto)),
)]
pub async fn edit_user(session: Session, Path(id): Path<i32>) -> Result<StatusCode, AppError> {
    deny_edit(&session, id).await
}

async fn deny_edit(session: &Session, id: i32) -> Result<StatusCode, AppError> {
    let caller_id = AuthSession::new(session).get_user_id().await?.unwrap_or_default();

    Err(AuthError::AccessDenied(caller_id, format!("Attempted to edit user {}", id)).into())
}
