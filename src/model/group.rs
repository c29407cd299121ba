use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserSummaryDto;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageDto {
    pub id: i32,
    pub content: String,
    pub author: UserSummaryDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupDto {
    pub id: i32,
    pub name: String,
    pub users: Vec<UserSummaryDto>,
    pub admins: Vec<UserSummaryDto>,
    pub messages: Vec<MessageDto>,
}

/// Optional body for creating a group.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateGroupDto {
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct MessageInputDto {
    pub content: Option<String>,
}
