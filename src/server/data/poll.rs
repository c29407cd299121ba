//! Poll data repository for database operations.
//!
//! A poll belongs to exactly one post. Votes are stored per choice; the repository
//! guarantees a user holds at most one vote across a poll's choices.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::poll::{
    Poll, PollChoice, PollChoiceParam, PollChoiceVotes, PollDetail, PollSummary,
};

pub struct PollRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PollRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an empty poll on a post.
    ///
    /// # Returns
    /// - `Ok(Poll)` - The created poll
    /// - `Err(DbErr)` - Database error, including a unique violation when the post
    ///   already has a poll
    pub async fn create(&self, post_id: i32) -> Result<Poll, DbErr> {
        let entity = entity::poll::ActiveModel {
            post_id: ActiveValue::Set(post_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Poll::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Poll>, DbErr> {
        let entity = entity::prelude::Poll::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Poll::from_entity))
    }

    pub async fn find_by_post_id(&self, post_id: i32) -> Result<Option<Poll>, DbErr> {
        let entity = entity::prelude::Poll::find()
            .filter(entity::poll::Column::PostId.eq(post_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Poll::from_entity))
    }

    /// Deletes a poll. Choices and votes cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Poll::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    pub async fn add_choice(
        &self,
        poll_id: i32,
        param: PollChoiceParam,
    ) -> Result<PollChoice, DbErr> {
        let entity = entity::poll_choice::ActiveModel {
            poll_id: ActiveValue::Set(poll_id),
            title: ActiveValue::Set(param.title),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PollChoice::from_entity(entity))
    }

    /// Finds a choice only if it belongs to the given poll.
    pub async fn find_choice(
        &self,
        poll_id: i32,
        choice_id: i32,
    ) -> Result<Option<PollChoice>, DbErr> {
        let entity = entity::prelude::PollChoice::find_by_id(choice_id)
            .filter(entity::poll_choice::Column::PollId.eq(poll_id))
            .one(self.db)
            .await?;

        Ok(entity.map(PollChoice::from_entity))
    }

    /// Deletes a choice. Its votes cascade.
    pub async fn remove_choice(&self, choice_id: i32) -> Result<(), DbErr> {
        entity::prelude::PollChoice::delete_by_id(choice_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Records a vote, replacing any vote the user already holds on the poll.
    ///
    /// Removal of the previous vote and insertion of the new one run in one transaction.
    pub async fn cast_vote(&self, poll_id: i32, choice_id: i32, user_id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        let choice_ids = poll_choice_ids(&txn, poll_id).await?;
        entity::prelude::PollVote::delete_many()
            .filter(entity::poll_vote::Column::UserId.eq(user_id))
            .filter(entity::poll_vote::Column::PollChoiceId.is_in(choice_ids))
            .exec(&txn)
            .await?;

        entity::poll_vote::ActiveModel {
            poll_choice_id: ActiveValue::Set(choice_id),
            user_id: ActiveValue::Set(user_id),
        }
        .insert(&txn)
        .await?;

        txn.commit().await
    }

    /// Removes the user's vote on the poll, if any.
    pub async fn remove_vote(&self, poll_id: i32, user_id: i32) -> Result<(), DbErr> {
        let choice_ids = poll_choice_ids(self.db, poll_id).await?;

        entity::prelude::PollVote::delete_many()
            .filter(entity::poll_vote::Column::UserId.eq(user_id))
            .filter(entity::poll_vote::Column::PollChoiceId.is_in(choice_ids))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets a poll with its choices and their voters.
    pub async fn get_detail(&self, id: i32) -> Result<Option<PollDetail>, DbErr> {
        let Some(poll) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(self.load_details(vec![poll]).await?.pop())
    }

    /// Gets every poll with its choices and voters, ordered by id.
    pub async fn get_all_details(&self) -> Result<Vec<PollDetail>, DbErr> {
        let polls = entity::prelude::Poll::find()
            .order_by_asc(entity::poll::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Poll::from_entity)
            .collect();

        self.load_details(polls).await
    }

    /// Gets the polls of several posts without votes, keyed by post id.
    pub async fn get_summaries_by_post_ids(
        &self,
        post_ids: &[i32],
    ) -> Result<HashMap<i32, PollSummary>, DbErr> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let polls: Vec<Poll> = entity::prelude::Poll::find()
            .filter(entity::poll::Column::PostId.is_in(post_ids.iter().copied()))
            .all(self.db)
            .await?
            .into_iter()
            .map(Poll::from_entity)
            .collect();

        let poll_ids: Vec<i32> = polls.iter().map(|p| p.id).collect();
        let mut choices = self.choices_by_poll(&poll_ids).await?;

        Ok(polls
            .into_iter()
            .map(|poll| {
                let summary = PollSummary {
                    choices: choices.remove(&poll.id).unwrap_or_default(),
                    poll,
                };
                (summary.poll.post_id, summary)
            })
            .collect())
    }

    async fn choices_by_poll(
        &self,
        poll_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<PollChoice>>, DbErr> {
        if poll_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let choices = entity::prelude::PollChoice::find()
            .filter(entity::poll_choice::Column::PollId.is_in(poll_ids.iter().copied()))
            .order_by_asc(entity::poll_choice::Column::Id)
            .all(self.db)
            .await?;

        let mut by_poll: HashMap<i32, Vec<PollChoice>> = HashMap::new();
        for choice in choices {
            by_poll
                .entry(choice.poll_id)
                .or_default()
                .push(PollChoice::from_entity(choice));
        }

        Ok(by_poll)
    }

    async fn load_details(&self, polls: Vec<Poll>) -> Result<Vec<PollDetail>, DbErr> {
        if polls.is_empty() {
            return Ok(Vec::new());
        }

        let poll_ids: Vec<i32> = polls.iter().map(|p| p.id).collect();
        let mut choices = self.choices_by_poll(&poll_ids).await?;

        let choice_ids: Vec<i32> = choices.values().flatten().map(|c| c.id).collect();
        let votes = if choice_ids.is_empty() {
            Vec::new()
        } else {
            entity::prelude::PollVote::find()
                .filter(entity::poll_vote::Column::PollChoiceId.is_in(choice_ids))
                .order_by_asc(entity::poll_vote::Column::UserId)
                .all(self.db)
                .await?
        };
        let mut voters: HashMap<i32, Vec<i32>> = HashMap::new();
        for vote in votes {
            voters
                .entry(vote.poll_choice_id)
                .or_default()
                .push(vote.user_id);
        }

        Ok(polls
            .into_iter()
            .map(|poll| PollDetail {
                choices: choices
                    .remove(&poll.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|choice| PollChoiceVotes {
                        voter_ids: voters.remove(&choice.id).unwrap_or_default(),
                        choice,
                    })
                    .collect(),
                poll,
            })
            .collect())
    }
}

async fn poll_choice_ids<C: ConnectionTrait>(db: &C, poll_id: i32) -> Result<Vec<i32>, DbErr> {
    Ok(entity::prelude::PollChoice::find()
        .filter(entity::poll_choice::Column::PollId.eq(poll_id))
        .all(db)
        .await?
        .into_iter()
        .map(|c| c.id)
        .collect())
}
