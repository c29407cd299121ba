//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are built from request DTOs and carry only validated values.

pub mod comment;
pub mod event;
pub mod group;
pub mod poll;
pub mod post;
pub mod user;
