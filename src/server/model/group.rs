//! Group and message domain models and parameters.

use crate::{
    model::group::{CreateGroupDto, GroupDto, MessageDto, MessageInputDto},
    server::{
        error::validation::ValidationErrors, model::user::User, util::validation::Validator,
    },
};

/// Name given to groups created without one.
pub const DEFAULT_GROUP_NAME: &str = "Nouveau groupe";

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i32,
    pub name: String,
}

impl Group {
    pub fn from_entity(entity: entity::group::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub author_id: i32,
    pub group_id: i32,
    pub content: String,
}

impl Message {
    pub fn from_entity(entity: entity::message::Model) -> Self {
        Self {
            id: entity.id,
            author_id: entity.author_id,
            group_id: entity.group_id,
            content: entity.content,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MessageDetail {
    pub message: Message,
    pub author: User,
}

/// A group with its members, admins and messages.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupDetail {
    pub group: Group,
    pub users: Vec<User>,
    pub admins: Vec<User>,
    pub messages: Vec<MessageDetail>,
}

impl GroupDetail {
    pub fn is_member(&self, user_id: i32) -> bool {
        self.users.iter().any(|u| u.id == user_id)
    }

    pub fn is_admin(&self, user_id: i32) -> bool {
        self.admins.iter().any(|u| u.id == user_id)
    }

    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.group.id,
            name: self.group.name,
            users: self.users.iter().map(User::to_summary_dto).collect(),
            admins: self.admins.iter().map(User::to_summary_dto).collect(),
            messages: self
                .messages
                .into_iter()
                .map(|m| MessageDto {
                    id: m.message.id,
                    content: m.message.content,
                    author: m.author.to_summary_dto(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGroupParam {
    /// User who becomes the first member and admin.
    pub creator_id: i32,
    pub name: String,
}

impl CreateGroupParam {
    pub fn from_dto(creator_id: i32, dto: CreateGroupDto) -> Result<Self, ValidationErrors> {
        let mut v = Validator::new();
        if dto.name.is_some() {
            v.not_blank("name", dto.name.as_deref()).max_length(
                "name",
                dto.name.as_deref(),
                255,
                "The group name cannot be longer than 255 characters",
            );
        }
        v.finish()?;

        Ok(Self {
            creator_id,
            name: dto.name.unwrap_or_else(|| DEFAULT_GROUP_NAME.to_string()),
        })
    }
}

#[derive(Debug, Clone)]
pub struct MessageParam {
    pub content: String,
}

impl MessageParam {
    pub fn from_dto(dto: MessageInputDto) -> Result<Self, ValidationErrors> {
        let mut v = Validator::new();
        v.not_blank("content", dto.content.as_deref()).max_length(
            "content",
            dto.content.as_deref(),
            255,
            "Your message cannot be longer than 255 characters",
        );
        v.finish()?;

        Ok(Self {
            content: dto.content.unwrap_or_default(),
        })
    }
}
