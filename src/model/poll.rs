use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::VoterDto;

/// A poll choice without its votes, nested inside a post.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PollChoiceDto {
    pub id: i32,
    pub title: String,
}

/// A poll without its votes, nested inside a post.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PollSummaryDto {
    pub id: i32,
    pub poll_choices: Vec<PollChoiceDto>,
}

/// A poll choice together with the users who voted for it.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PollChoiceVotesDto {
    pub id: i32,
    pub title: String,
    pub users: Vec<VoterDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PollDto {
    pub id: i32,
    pub post_id: i32,
    pub poll_choices: Vec<PollChoiceVotesDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PollChoiceInputDto {
    pub title: Option<String>,
}
