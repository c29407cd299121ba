//! Data transfer objects exchanged with API clients.
//!
//! Each response DTO is one exposure profile of a domain entity: it lists exactly the
//! fields and nested relations a given endpoint returns. Field names are serialized in
//! camelCase. Request DTOs keep every field optional so that missing values surface as
//! validation errors instead of deserialization failures.

pub mod api;
pub mod comment;
pub mod event;
pub mod group;
pub mod poll;
pub mod post;
pub mod user;
