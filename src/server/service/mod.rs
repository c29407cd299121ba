//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Existence checks and state rules (one poll per post, one vote per
//!   user and poll, at least one admin per group)
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Who may call an operation is decided before the service runs, by the controller's
//! `AuthGuard`.

use sea_orm::DatabaseConnection;

use crate::server::{data::user::UserRepository, error::AppError};

pub mod auth;
pub mod comment;
pub mod event;
pub mod group;
pub mod poll;
pub mod post;
pub mod user;


/// Fails with `NotFound` unless the user exists.
pub(crate) async fn require_user(db: &DatabaseConnection, user_id: i32) -> Result<(), AppError> {
    match UserRepository::new(db).find_by_id(user_id).await? {
        Some(_) => Ok(()),
        None => Err(AppError::NotFound(format!("User {} not found", user_id))),
    }
}
