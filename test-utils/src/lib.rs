//! Social API Test Utils
//!
//! Provides shared testing utilities for the social API. This crate offers a builder
//! for creating test contexts backed by in-memory SQLite databases, plus factories for
//! inserting users, posts, comments, events, groups and polls with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring which tables exist
//! - **TestContext**: Test environment holding the database connection and a session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn likes_a_post() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_post_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let author = factory::create_user(db).await?;
//!     let post = factory::create_post(db, author.id).await?;
//!     // ...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
