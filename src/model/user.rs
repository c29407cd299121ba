use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user as returned by the user and auth endpoints.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub name: String,
}

/// A user nested inside another resource (author, member, liker, ...).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryDto {
    pub id: i32,
    pub name: String,
}

/// A user nested inside a poll choice's vote list.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct VoterDto {
    pub id: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct RegisterUserDto {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}
