use sea_orm::DatabaseConnection;

use crate::server::{
    data::{poll::PollRepository, post::PostRepository},
    error::{internal::InternalError, AppError},
    model::poll::{PollChoiceParam, PollDetail},
};

/// Poll rules: one poll per post, and at most one vote per user and poll.
pub struct PollService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PollService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<PollDetail>, AppError> {
        Ok(PollRepository::new(self.db).get_all_details().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<PollDetail>, AppError> {
        Ok(PollRepository::new(self.db).get_detail(id).await?)
    }

    /// Opens an empty poll on a post.
    ///
    /// # Returns
    /// - `Ok(PollDetail)` - The new poll
    /// - `Err(AppError::NotFound)` - The post does not exist
    /// - `Err(AppError::Conflict)` - The post already has a poll
    pub async fn create(&self, post_id: i32) -> Result<PollDetail, AppError> {
        let repo = PollRepository::new(self.db);

        if PostRepository::new(self.db).find_by_id(post_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Post {} not found", post_id)));
        }

        if repo.find_by_post_id(post_id).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Post {} already has a poll",
                post_id
            )));
        }

        let poll = repo.create(post_id).await?;

        self.detail_after_write(poll.id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.require_poll(id).await?;

        Ok(PollRepository::new(self.db).delete(id).await?)
    }

    pub async fn add_choice(&self, id: i32, param: PollChoiceParam) -> Result<PollDetail, AppError> {
        self.require_poll(id).await?;

        PollRepository::new(self.db).add_choice(id, param).await?;

        self.detail_after_write(id).await
    }

    /// Removes a choice together with its votes.
    ///
    /// # Returns
    /// - `Ok(PollDetail)` - The poll without the choice
    /// - `Err(AppError::NotFound)` - The poll does not exist or the choice is not one of
    ///   its choices
    pub async fn remove_choice(&self, id: i32, choice_id: i32) -> Result<PollDetail, AppError> {
        self.require_poll(id).await?;
        self.require_choice(id, choice_id).await?;

        PollRepository::new(self.db).remove_choice(choice_id).await?;

        self.detail_after_write(id).await
    }

    /// Votes for a choice, replacing the user's previous vote on the poll.
    ///
    /// # Returns
    /// - `Ok(PollDetail)` - The poll with the updated votes
    /// - `Err(AppError::NotFound)` - The poll does not exist or the choice is not one of
    ///   its choices
    pub async fn vote(&self, id: i32, choice_id: i32, user_id: i32) -> Result<PollDetail, AppError> {
        self.require_poll(id).await?;
        self.require_choice(id, choice_id).await?;

        PollRepository::new(self.db)
            .cast_vote(id, choice_id, user_id)
            .await?;

        self.detail_after_write(id).await
    }

    /// Withdraws the user's vote on the poll. Withdrawing without a vote is a no-op.
    pub async fn unvote(&self, id: i32, user_id: i32) -> Result<PollDetail, AppError> {
        self.require_poll(id).await?;

        PollRepository::new(self.db).remove_vote(id, user_id).await?;

        self.detail_after_write(id).await
    }

    async fn require_poll(&self, id: i32) -> Result<(), AppError> {
        match PollRepository::new(self.db).find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!("Poll {} not found", id))),
        }
    }

    async fn require_choice(&self, id: i32, choice_id: i32) -> Result<(), AppError> {
        match PollRepository::new(self.db).find_choice(id, choice_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!(
                "Choice {} not found in poll {}",
                choice_id, id
            ))),
        }
    }

    async fn detail_after_write(&self, id: i32) -> Result<PollDetail, AppError> {
        PollRepository::new(self.db)
            .get_detail(id)
            .await?
            .ok_or_else(|| InternalError::MissingAfterWrite { entity: "Poll", id }.into())
    }
}
