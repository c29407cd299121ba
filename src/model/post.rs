use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    comment::CommentDto, event::EventSummaryDto, poll::PollSummaryDto, user::UserSummaryDto,
};

/// A post as returned by the post endpoints.
///
/// Relation sections depend on the endpoint. Absent sections are omitted from the
/// JSON, while a present `poll` or `event` section with no value serializes as `null`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i32,
    pub content: String,
    pub published_at: DateTime<Utc>,
    pub image: Option<String>,
    pub author: UserSummaryDto,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liked_by: Option<Vec<UserSummaryDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<CommentDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<PollSummaryDto>)]
    pub poll: Option<Option<PollSummaryDto>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<EventSummaryDto>)]
    pub event: Option<Option<EventSummaryDto>>,
}

/// Body for creating or replacing a post.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PostInputDto {
    pub content: Option<String>,
    pub image: Option<String>,
}
