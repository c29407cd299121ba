//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` shortcut for
//! the common case. Factories fill required columns with unique defaults so tests only
//! spell out the values they assert on.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let author = factory::create_user(db).await?;
//! let post = factory::post::PostFactory::new(db, author.id)
//!     .content("Hello")
//!     .build()
//!     .await?;
//! factory::post::like_post(db, post.id, author.id).await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users
//! - `post` - Posts and likes
//! - `comment` - Comments
//! - `event` - Events and event members
//! - `group` - Groups, members, admins and messages
//! - `poll` - Polls, choices and votes
//! - `helpers` - Unique id generation and multi-entity shortcuts

pub mod comment;
pub mod event;
pub mod group;
pub mod helpers;
pub mod poll;
pub mod post;
pub mod user;

pub use comment::create_comment;
pub use event::create_event;
pub use group::create_group;
pub use poll::{create_poll, create_poll_choice};
pub use post::create_post;
pub use user::create_user;
