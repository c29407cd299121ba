use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id is stored in the session.
    ///
    /// The request was made without logging in first, or the session expired.
    #[error("No user is logged in for this session")]
    UserNotInSession,

    /// The session refers to a user that no longer exists.
    ///
    /// Happens after the account was deleted from another session.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Email and password did not match any user.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// The logged-in user is not allowed to perform the operation.
    ///
    /// # Fields
    /// - User id of the caller
    /// - Reason logged server-side
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// The operation requires an anonymous caller.
    #[error("Already authenticated")]
    AlreadyAuthenticated,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` / `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` / `AlreadyAuthenticated` → 403 Forbidden
///
/// The detailed reason is logged at debug level. Clients only see a short message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
            Self::AlreadyAuthenticated => (StatusCode::FORBIDDEN, "You are already logged in"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
