//! Poll domain models and parameters.

use crate::{
    model::poll::{
        PollChoiceDto, PollChoiceInputDto, PollChoiceVotesDto, PollDto, PollSummaryDto,
    },
    server::{
        error::validation::ValidationErrors, model::user::voter_dto, util::validation::Validator,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Poll {
    pub id: i32,
    pub post_id: i32,
}

impl Poll {
    pub fn from_entity(entity: entity::poll::Model) -> Self {
        Self {
            id: entity.id,
            post_id: entity.post_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PollChoice {
    pub id: i32,
    pub poll_id: i32,
    pub title: String,
}

impl PollChoice {
    pub fn from_entity(entity: entity::poll_choice::Model) -> Self {
        Self {
            id: entity.id,
            poll_id: entity.poll_id,
            title: entity.title,
        }
    }

    fn to_dto(&self) -> PollChoiceDto {
        PollChoiceDto {
            id: self.id,
            title: self.title.clone(),
        }
    }
}

/// A poll with its choices but without votes, as nested inside a post.
#[derive(Debug, Clone, PartialEq)]
pub struct PollSummary {
    pub poll: Poll,
    pub choices: Vec<PollChoice>,
}

impl PollSummary {
    pub fn into_dto(self) -> PollSummaryDto {
        PollSummaryDto {
            id: self.poll.id,
            poll_choices: self.choices.iter().map(PollChoice::to_dto).collect(),
        }
    }
}

/// A choice and the ids of the users who voted for it.
#[derive(Debug, Clone, PartialEq)]
pub struct PollChoiceVotes {
    pub choice: PollChoice,
    pub voter_ids: Vec<i32>,
}

/// A poll with every choice and its votes.
#[derive(Debug, Clone, PartialEq)]
pub struct PollDetail {
    pub poll: Poll,
    pub choices: Vec<PollChoiceVotes>,
}

impl PollDetail {
    /// The choice the user currently votes for, if any.
    pub fn vote_of(&self, user_id: i32) -> Option<i32> {
        self.choices
            .iter()
            .find(|c| c.voter_ids.contains(&user_id))
            .map(|c| c.choice.id)
    }

    pub fn into_dto(self) -> PollDto {
        PollDto {
            id: self.poll.id,
            post_id: self.poll.post_id,
            poll_choices: self
                .choices
                .into_iter()
                .map(|c| PollChoiceVotesDto {
                    id: c.choice.id,
                    title: c.choice.title,
                    users: c.voter_ids.into_iter().map(voter_dto).collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PollChoiceParam {
    pub title: String,
}

impl PollChoiceParam {
    pub fn from_dto(dto: PollChoiceInputDto) -> Result<Self, ValidationErrors> {
        let mut v = Validator::new();
        v.not_blank("title", dto.title.as_deref()).max_length(
            "title",
            dto.title.as_deref(),
            255,
            "Your choice cannot be longer than 255 characters",
        );
        v.finish()?;

        Ok(Self {
            title: dto.title.unwrap_or_default(),
        })
    }
}
