//! Event data repository for database operations.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::user::{users_in_order, UserRepository},
    model::event::{Event, EventDetail, EventParam},
};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event owned by `owner_id`. The owner does not become a member.
    pub async fn create(&self, owner_id: i32, param: EventParam) -> Result<Event, DbErr> {
        let entity = entity::event::ActiveModel {
            owner_id: ActiveValue::Set(Some(owner_id)),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            start_date: ActiveValue::Set(param.start_date),
            end_date: ActiveValue::Set(param.end_date),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let entity = entity::prelude::Event::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Event::from_entity))
    }

    /// Gets the events with the given ids, keyed by id.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, Event>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::Event::find()
            .filter(entity::event::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|e| (e.id, Event::from_entity(e)))
            .collect())
    }

    /// Replaces every editable field of an event. Owner and members are kept.
    ///
    /// # Returns
    /// - `Ok(Event)` - The updated event
    /// - `Err(DbErr::RecordNotFound)` - No event with that id
    pub async fn update(&self, id: i32, param: EventParam) -> Result<Event, DbErr> {
        let entity = entity::prelude::Event::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Event with id {} not found",
                id
            )))?;

        let mut active_model: entity::event::ActiveModel = entity.into();
        active_model.title = ActiveValue::Set(param.title);
        active_model.description = ActiveValue::Set(param.description);
        active_model.start_date = ActiveValue::Set(param.start_date);
        active_model.end_date = ActiveValue::Set(param.end_date);

        let entity = active_model.update(self.db).await?;

        Ok(Event::from_entity(entity))
    }

    /// Deletes an event together with the post it is attached to.
    ///
    /// Both deletes run in one transaction. Memberships cascade with the event.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Post::delete_many()
            .filter(entity::post::Column::EventId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::Event::delete_by_id(id).exec(&txn).await?;

        txn.commit().await
    }

    /// Adds a member. Joining twice keeps a single membership.
    pub async fn add_member(&self, event_id: i32, user_id: i32) -> Result<(), DbErr> {
        let existing = entity::prelude::EventMember::find_by_id((event_id, user_id))
            .one(self.db)
            .await?;

        if existing.is_none() {
            entity::event_member::ActiveModel {
                event_id: ActiveValue::Set(event_id),
                user_id: ActiveValue::Set(user_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Removes a member. Removing a non-member is a no-op.
    pub async fn remove_member(&self, event_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::EventMember::delete_by_id((event_id, user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets an event with its owner, members and attached post id.
    pub async fn get_detail(&self, id: i32) -> Result<Option<EventDetail>, DbErr> {
        let Some(event) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(self.load_details(vec![event]).await?.pop())
    }

    /// Gets every event with its relations, ordered by id.
    pub async fn get_all_details(&self) -> Result<Vec<EventDetail>, DbErr> {
        let events = entity::prelude::Event::find()
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Event::from_entity)
            .collect();

        self.load_details(events).await
    }

    async fn load_details(&self, events: Vec<Event>) -> Result<Vec<EventDetail>, DbErr> {
        if events.is_empty() {
            return Ok(Vec::new());
        }

        let event_ids: Vec<i32> = events.iter().map(|e| e.id).collect();

        let memberships = entity::prelude::EventMember::find()
            .filter(entity::event_member::Column::EventId.is_in(event_ids.iter().copied()))
            .order_by_asc(entity::event_member::Column::UserId)
            .all(self.db)
            .await?;
        let mut members_by_event: HashMap<i32, Vec<i32>> = HashMap::new();
        for membership in &memberships {
            members_by_event
                .entry(membership.event_id)
                .or_default()
                .push(membership.user_id);
        }

        let post_by_event: HashMap<i32, i32> = entity::prelude::Post::find()
            .filter(entity::post::Column::EventId.is_in(event_ids.iter().copied()))
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|p| p.event_id.map(|event_id| (event_id, p.id)))
            .collect();

        let mut user_ids: Vec<i32> = events.iter().filter_map(|e| e.owner_id).collect();
        user_ids.extend(memberships.iter().map(|m| m.user_id));
        user_ids.sort_unstable();
        user_ids.dedup();
        let users = UserRepository::new(self.db).get_by_ids(&user_ids).await?;

        Ok(events
            .into_iter()
            .map(|event| EventDetail {
                owner: event.owner_id.and_then(|id| users.get(&id).cloned()),
                members: members_by_event
                    .get(&event.id)
                    .map(|ids| users_in_order(ids, &users))
                    .unwrap_or_default(),
                post_id: post_by_event.get(&event.id).copied(),
                event,
            })
            .collect())
    }
}
