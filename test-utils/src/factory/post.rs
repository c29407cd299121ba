//! Post factory for creating test posts and likes.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test posts.
///
/// # Example
///
/// ```rust,ignore
/// let post = PostFactory::new(&db, author.id)
///     .content("Hello world")
///     .image("https://example.com/cat.png")
///     .build()
///     .await?;
/// ```
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    event_id: Option<i32>,
    content: String,
    published_at: DateTime<Utc>,
    image: Option<String>,
}

impl<'a> PostFactory<'a> {
    /// Creates a new PostFactory for the given author.
    ///
    /// Defaults:
    /// - content: `"Post {id}"`
    /// - published_at: now
    /// - no event, no image
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        Self {
            db,
            author_id,
            event_id: None,
            content: format!("Post {}", next_id()),
            published_at: Utc::now(),
            image: None,
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn event_id(mut self, event_id: i32) -> Self {
        self.event_id = Some(event_id);
        self
    }

    pub fn published_at(mut self, published_at: DateTime<Utc>) -> Self {
        self.published_at = published_at;
        self
    }

    /// Builds and inserts the post entity into the database.
    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            author_id: ActiveValue::Set(self.author_id),
            event_id: ActiveValue::Set(self.event_id),
            content: ActiveValue::Set(self.content),
            published_at: ActiveValue::Set(self.published_at),
            image: ActiveValue::Set(self.image),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post with default values for the given author.
pub async fn create_post(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, author_id).build().await
}

/// Records that a user likes a post.
pub async fn like_post(
    db: &DatabaseConnection,
    post_id: i32,
    user_id: i32,
) -> Result<entity::post_like::Model, DbErr> {
    entity::post_like::ActiveModel {
        post_id: ActiveValue::Set(post_id),
        user_id: ActiveValue::Set(user_id),
    }
    .insert(db)
    .await
}
