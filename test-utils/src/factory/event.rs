//! Event factory for creating test events and event members.

use crate::factory::helpers::next_id;
use chrono::{Days, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events.
///
/// # Example
///
/// ```rust,ignore
/// let event = EventFactory::new(&db)
///     .owner_id(user.id)
///     .title("Picnic")
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: Option<i32>,
    title: String,
    description: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with default values.
    ///
    /// Defaults:
    /// - no owner
    /// - title: `"Event {id}"`
    /// - description: `"Description for event {id}"`
    /// - start_date: today, end_date: tomorrow
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let today = Utc::now().date_naive();
        Self {
            db,
            owner_id: None,
            title: format!("Event {}", id),
            description: format!("Description for event {}", id),
            start_date: today,
            end_date: today.checked_add_days(Days::new(1)).unwrap_or(today),
        }
    }

    pub fn owner_id(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    /// Builds and inserts the event entity into the database.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        entity::event::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event owned by the given user.
pub async fn create_event(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).owner_id(owner_id).build().await
}

/// Adds a user to an event's members.
pub async fn add_event_member(
    db: &DatabaseConnection,
    event_id: i32,
    user_id: i32,
) -> Result<entity::event_member::Model, DbErr> {
    entity::event_member::ActiveModel {
        event_id: ActiveValue::Set(event_id),
        user_id: ActiveValue::Set(user_id),
    }
    .insert(db)
    .await
}
