use sea_orm::DatabaseConnection;

use crate::server::{
    data::event::EventRepository,
    error::{internal::InternalError, AppError},
    model::event::{EventDetail, EventParam},
    service::require_user,
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<EventDetail>, AppError> {
        Ok(EventRepository::new(self.db).get_all_details().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<EventDetail>, AppError> {
        Ok(EventRepository::new(self.db).get_detail(id).await?)
    }

    pub async fn create(&self, owner_id: i32, param: EventParam) -> Result<EventDetail, AppError> {
        let event = EventRepository::new(self.db).create(owner_id, param).await?;

        self.detail_after_write(event.id).await
    }

    pub async fn update(&self, id: i32, param: EventParam) -> Result<EventDetail, AppError> {
        self.require_event(id).await?;

        EventRepository::new(self.db).update(id, param).await?;

        self.detail_after_write(id).await
    }

    /// Deletes an event and the post it is attached to.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.require_event(id).await?;

        EventRepository::new(self.db).delete(id).await?;

        tracing::debug!(event_id = id, "Deleted event");

        Ok(())
    }

    /// Adds a member. Adding an existing member is a no-op.
    ///
    /// # Returns
    /// - `Ok(EventDetail)` - The event with its members
    /// - `Err(AppError::NotFound)` - Event or user does not exist
    pub async fn add_member(&self, id: i32, user_id: i32) -> Result<EventDetail, AppError> {
        self.require_event(id).await?;
        require_user(self.db, user_id).await?;

        EventRepository::new(self.db).add_member(id, user_id).await?;

        self.detail_after_write(id).await
    }

    /// Removes a member. Removing a non-member is a no-op.
    pub async fn remove_member(&self, id: i32, user_id: i32) -> Result<EventDetail, AppError> {
        self.require_event(id).await?;
        require_user(self.db, user_id).await?;

        EventRepository::new(self.db)
            .remove_member(id, user_id)
            .await?;

        self.detail_after_write(id).await
    }

    async fn require_event(&self, id: i32) -> Result<(), AppError> {
        match EventRepository::new(self.db).find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!("Event {} not found", id))),
        }
    }

    async fn detail_after_write(&self, id: i32) -> Result<EventDetail, AppError> {
        EventRepository::new(self.db)
            .get_detail(id)
            .await?
            .ok_or_else(|| InternalError::MissingAfterWrite { entity: "Event", id }.into())
    }
}
