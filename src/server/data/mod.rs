//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Detail loaders fetch relations in batches keyed by id rather than one query per row.

pub mod comment;
pub mod event;
pub mod group;
pub mod poll;
pub mod post;
pub mod user;

#[cfg(test)]
mod test;
