use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserSummaryDto;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i32,
    pub message: String,
    pub published_at: DateTime<Utc>,
    pub image: Option<String>,
    pub author: UserSummaryDto,
}

/// Body for creating or replacing a comment.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CommentInputDto {
    pub message: Option<String>,
    pub image: Option<String>,
}
