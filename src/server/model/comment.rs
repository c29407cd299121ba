//! Comment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::comment::{CommentDto, CommentInputDto},
    server::{
        error::validation::ValidationErrors, model::user::User, util::validation::Validator,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub author_id: i32,
    pub post_id: i32,
    pub message: String,
    pub published_at: DateTime<Utc>,
    pub image: Option<String>,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            author_id: entity.author_id,
            post_id: entity.post_id,
            message: entity.message,
            published_at: entity.published_at,
            image: entity.image,
        }
    }
}

/// A comment together with its author.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentDetail {
    pub comment: Comment,
    pub author: User,
}

impl CommentDetail {
    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.comment.id,
            message: self.comment.message,
            published_at: self.comment.published_at,
            image: self.comment.image,
            author: self.author.to_summary_dto(),
        }
    }
}

/// Validated comment body, used for both creation and replacement.
#[derive(Debug, Clone)]
pub struct CommentContentParam {
    pub message: String,
    pub image: Option<String>,
}

impl CommentContentParam {
    pub fn from_dto(dto: CommentInputDto) -> Result<Self, ValidationErrors> {
        let mut v = Validator::new();
        v.not_blank("message", dto.message.as_deref()).max_length(
            "message",
            dto.message.as_deref(),
            800,
            "Your message cannot be longer than 800 characters",
        );
        v.finish()?;

        Ok(Self {
            message: dto.message.unwrap_or_default(),
            image: dto.image,
        })
    }
}
