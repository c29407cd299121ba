use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Post, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Post)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the entity using SQLite syntax. Foreign
    /// keys and their cascade rules come from the entity's `belongs_to` relations, so
    /// tables should be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables needed for posts and everything a post response nests.
    ///
    /// Adds, in dependency order: User, Event, Post, PostLike, Comment, Poll, PollChoice,
    /// PollVote.
    pub fn with_post_tables(self) -> Self {
        self.with_table(User)
            .with_table(Event)
            .with_table(Post)
            .with_table(PostLike)
            .with_table(Comment)
            .with_table(Poll)
            .with_table(PollChoice)
            .with_table(PollVote)
    }

    /// Adds the tables needed for events and their members.
    ///
    /// Posts are included because an event can be attached to a post.
    pub fn with_event_tables(self) -> Self {
        self.with_post_tables().with_table(EventMember)
    }

    /// Adds the tables needed for groups, their members, admins and messages.
    pub fn with_group_tables(self) -> Self {
        self.with_table(User)
            .with_table(Group)
            .with_table(GroupUser)
            .with_table(GroupAdmin)
            .with_table(Message)
    }

    /// Adds the tables needed for polls, their choices and votes.
    ///
    /// Polls belong to posts, so this is the post schema.
    pub fn with_poll_tables(self) -> Self {
        self.with_post_tables()
    }

    /// Adds every table in the schema.
    ///
    /// Used by tests that exercise cascades across domains or drive the full router.
    pub fn with_all_tables(self) -> Self {
        self.with_post_tables()
            .with_table(EventMember)
            .with_table(Group)
            .with_table(GroupUser)
            .with_table(GroupAdmin)
            .with_table(Message)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with all tables created
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
