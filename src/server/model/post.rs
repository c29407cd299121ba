//! Post domain models and parameters.
//!
//! A post is returned through one of three exposure profiles, see [`PostView`].

use chrono::{DateTime, Utc};

use crate::{
    model::post::{PostDto, PostInputDto},
    server::{
        error::validation::ValidationErrors,
        model::{comment::CommentDetail, event::Event, poll::PollSummary, user::User},
        util::validation::Validator,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i32,
    pub author_id: i32,
    pub event_id: Option<i32>,
    pub content: String,
    pub published_at: DateTime<Utc>,
    pub image: Option<String>,
}

impl Post {
    pub fn from_entity(entity: entity::post::Model) -> Self {
        Self {
            id: entity.id,
            author_id: entity.author_id,
            event_id: entity.event_id,
            content: entity.content,
            published_at: entity.published_at,
            image: entity.image,
        }
    }
}

/// Which relations a post response carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostView {
    /// Listing and single fetch: likers, comments and the poll.
    Full,
    /// Create, update and like endpoints: likers and comments.
    Interactions,
    /// Event attach / detach endpoints: only the attached event.
    Event,
}

/// A post with every relation a view may need.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDetail {
    pub post: Post,
    pub author: User,
    pub liked_by: Vec<User>,
    pub comments: Vec<CommentDetail>,
    pub poll: Option<PollSummary>,
    pub event: Option<Event>,
}

impl PostDetail {
    pub fn into_dto(self, view: PostView) -> PostDto {
        let (with_interactions, with_poll, with_event) = match view {
            PostView::Full => (true, true, false),
            PostView::Interactions => (true, false, false),
            PostView::Event => (false, false, true),
        };

        PostDto {
            id: self.post.id,
            content: self.post.content,
            published_at: self.post.published_at,
            image: self.post.image,
            author: self.author.to_summary_dto(),
            liked_by: with_interactions
                .then(|| self.liked_by.iter().map(User::to_summary_dto).collect()),
            comments: with_interactions.then(|| {
                self.comments
                    .into_iter()
                    .map(CommentDetail::into_dto)
                    .collect()
            }),
            poll: with_poll.then(|| self.poll.map(PollSummary::into_dto)),
            event: with_event.then(|| self.event.map(Event::into_summary_dto)),
        }
    }
}

/// Validated post body, used for both creation and replacement.
#[derive(Debug, Clone)]
pub struct PostContentParam {
    pub content: String,
    pub image: Option<String>,
}

impl PostContentParam {
    pub fn from_dto(dto: PostInputDto) -> Result<Self, ValidationErrors> {
        let mut v = Validator::new();
        v.not_blank("content", dto.content.as_deref()).max_length(
            "content",
            dto.content.as_deref(),
            800,
            "Your content cannot be longer than 800 characters",
        );
        v.finish()?;

        Ok(Self {
            content: dto.content.unwrap_or_default(),
            image: dto.image,
        })
    }
}
