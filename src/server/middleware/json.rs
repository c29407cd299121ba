//! JSON body extractor that answers malformed bodies with the API error envelope.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::server::error::AppError;

/// Drop-in for `axum::Json` in handler arguments.
///
/// A body that is not JSON, has the wrong content type or holds a wrongly typed value
/// becomes `AppError::BadRequest`, rendered as `400 {"error": ...}` instead of axum's
/// plain-text rejection.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(status = %rejection.status(), "Rejected request body");
                Err(AppError::BadRequest(rejection.body_text()))
            }
        }
    }
}
