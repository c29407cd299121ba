//! Poll factory for creating test polls, choices and votes.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a poll attached to the given post.
pub async fn create_poll(
    db: &DatabaseConnection,
    post_id: i32,
) -> Result<entity::poll::Model, DbErr> {
    entity::poll::ActiveModel {
        post_id: ActiveValue::Set(post_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Factory for creating poll choices.
pub struct PollChoiceFactory<'a> {
    db: &'a DatabaseConnection,
    poll_id: i32,
    title: String,
}

impl<'a> PollChoiceFactory<'a> {
    /// Creates a new PollChoiceFactory with title `"Choice {id}"`.
    pub fn new(db: &'a DatabaseConnection, poll_id: i32) -> Self {
        Self {
            db,
            poll_id,
            title: format!("Choice {}", next_id()),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds and inserts the poll choice.
    pub async fn build(self) -> Result<entity::poll_choice::Model, DbErr> {
        entity::poll_choice::ActiveModel {
            poll_id: ActiveValue::Set(self.poll_id),
            title: ActiveValue::Set(self.title),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a poll choice with a default title.
pub async fn create_poll_choice(
    db: &DatabaseConnection,
    poll_id: i32,
) -> Result<entity::poll_choice::Model, DbErr> {
    PollChoiceFactory::new(db, poll_id).build().await
}

/// Records a user's vote for a poll choice.
///
/// Inserts the row directly without removing the user's other votes on the poll.
pub async fn create_vote(
    db: &DatabaseConnection,
    poll_choice_id: i32,
    user_id: i32,
) -> Result<entity::poll_vote::Model, DbErr> {
    entity::poll_vote::ActiveModel {
        poll_choice_id: ActiveValue::Set(poll_choice_id),
        user_id: ActiveValue::Set(user_id),
    }
    .insert(db)
    .await
}
