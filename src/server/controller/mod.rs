//! HTTP request handlers.
//!
//! Each handler checks access with `AuthGuard`, converts the request DTO into a
//! parameter type, calls the matching service and converts the result back into a DTO.
//! Reads are public. Every mutation requires a logged-in user.
//!
//! `201` is only returned when a resource is created and `204` only on delete. Every
//! other `PUT`, including like, member and admin changes, answers `200` with the updated
//! resource.

pub mod auth;
pub mod comment;
pub mod event;
pub mod group;
pub mod poll;
pub mod post;
pub mod user;

#[cfg(test)]
mod test;
