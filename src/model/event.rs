use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserSummaryDto;

/// Event fields without relations, nested inside a post.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventSummaryDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub owner: Option<UserSummaryDto>,
    pub members: Vec<UserSummaryDto>,
    /// Post the event is attached to, if any.
    pub post_id: Option<i32>,
}

/// Body for creating or replacing an event.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct EventInputDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
