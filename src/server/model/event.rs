//! Event domain models and parameters.

use chrono::NaiveDate;

use crate::{
    model::event::{EventDto, EventInputDto, EventSummaryDto},
    server::{
        error::validation::ValidationErrors, model::user::User, util::validation::Validator,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub owner_id: Option<i32>,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            title: entity.title,
            description: entity.description,
            start_date: entity.start_date,
            end_date: entity.end_date,
        }
    }

    pub fn is_owned_by(&self, user_id: i32) -> bool {
        self.owner_id == Some(user_id)
    }

    /// Projection used when the event is nested inside a post.
    pub fn into_summary_dto(self) -> EventSummaryDto {
        EventSummaryDto {
            id: self.id,
            title: self.title,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// An event with its owner, members and the post it is attached to.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDetail {
    pub event: Event,
    pub owner: Option<User>,
    pub members: Vec<User>,
    pub post_id: Option<i32>,
}

impl EventDetail {
    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.event.id,
            title: self.event.title,
            description: self.event.description,
            start_date: self.event.start_date,
            end_date: self.event.end_date,
            owner: self.owner.as_ref().map(User::to_summary_dto),
            members: self.members.iter().map(User::to_summary_dto).collect(),
            post_id: self.post_id,
        }
    }
}

/// Validated event body, used for both creation and replacement.
#[derive(Debug, Clone)]
pub struct EventParam {
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl EventParam {
    pub fn from_dto(dto: EventInputDto) -> Result<Self, ValidationErrors> {
        let mut v = Validator::new();
        v.not_blank("title", dto.title.as_deref())
            .not_blank("description", dto.description.as_deref())
            .not_null("startDate", dto.start_date.as_ref())
            .not_null("endDate", dto.end_date.as_ref());
        let (start_date, end_date) = v.finish_with(dto.start_date.zip(dto.end_date))?;

        Ok(Self {
            title: dto.title.unwrap_or_default(),
            description: dto.description.unwrap_or_default(),
            start_date,
            end_date,
        })
    }
}
