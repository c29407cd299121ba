//! Comment factory for creating test comments.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test comments on a post.
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    post_id: i32,
    author_id: i32,
    message: String,
    image: Option<String>,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory.
    ///
    /// Defaults:
    /// - message: `"Comment {id}"`
    /// - no image
    pub fn new(db: &'a DatabaseConnection, post_id: i32, author_id: i32) -> Self {
        Self {
            db,
            post_id,
            author_id,
            message: format!("Comment {}", next_id()),
            image: None,
        }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Builds and inserts the comment entity into the database.
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            author_id: ActiveValue::Set(self.author_id),
            post_id: ActiveValue::Set(self.post_id),
            message: ActiveValue::Set(self.message),
            published_at: ActiveValue::Set(Utc::now()),
            image: ActiveValue::Set(self.image),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a comment with default values.
pub async fn create_comment(
    db: &DatabaseConnection,
    post_id: i32,
    author_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, post_id, author_id).build().await
}
