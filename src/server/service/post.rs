use sea_orm::DatabaseConnection;

use crate::server::{
    data::{event::EventRepository, post::PostRepository},
    error::{auth::AuthError, internal::InternalError, AppError},
    model::post::{Post, PostContentParam, PostDetail},
    service::require_user,
};

pub struct PostService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<PostDetail>, AppError> {
        Ok(PostRepository::new(self.db).get_all_details().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<PostDetail>, AppError> {
        Ok(PostRepository::new(self.db).get_detail(id).await?)
    }

    /// Publishes a post for an existing author.
    ///
    /// # Returns
    /// - `Ok(PostDetail)` - The new post
    /// - `Err(AppError::NotFound)` - The author does not exist
    pub async fn create(
        &self,
        author_id: i32,
        param: PostContentParam,
    ) -> Result<PostDetail, AppError> {
        require_user(self.db, author_id).await?;

        let post = PostRepository::new(self.db).create(author_id, param).await?;

        self.detail_after_write(post.id).await
    }

    pub async fn update(&self, id: i32, param: PostContentParam) -> Result<PostDetail, AppError> {
        self.require_post(id).await?;

        PostRepository::new(self.db).update(id, param).await?;

        self.detail_after_write(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.require_post(id).await?;

        Ok(PostRepository::new(self.db).delete(id).await?)
    }

    /// Adds a like on behalf of `user_id`. Liking twice is a no-op.
    pub async fn add_like(&self, id: i32, user_id: i32) -> Result<PostDetail, AppError> {
        self.require_post(id).await?;
        require_user(self.db, user_id).await?;

        PostRepository::new(self.db).add_like(id, user_id).await?;

        self.detail_after_write(id).await
    }

    /// Removes a like on behalf of `user_id`. Unliking a post that was not liked is a no-op.
    pub async fn remove_like(&self, id: i32, user_id: i32) -> Result<PostDetail, AppError> {
        self.require_post(id).await?;
        require_user(self.db, user_id).await?;

        PostRepository::new(self.db).remove_like(id, user_id).await?;

        self.detail_after_write(id).await
    }

    /// Attaches one of the caller's events to a post.
    ///
    /// A post that already has an event is refused before the event is looked up.
    ///
    /// # Returns
    /// - `Ok(PostDetail)` - The post with its event
    /// - `Err(AppError::NotFound)` - Post or event does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - The caller does not own the event
    /// - `Err(AppError::Conflict)` - The post already has an event, or the event is
    ///   attached to another post
    pub async fn attach_event(
        &self,
        id: i32,
        event_id: i32,
        caller_id: i32,
    ) -> Result<PostDetail, AppError> {
        let post_repo = PostRepository::new(self.db);
        let post = self.require_post(id).await?;

        if post.event_id.is_some() {
            return Err(AppError::Conflict(format!(
                "Post {} already has an event",
                id
            )));
        }

        let event = EventRepository::new(self.db)
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Event {} not found", event_id)))?;

        if !event.is_owned_by(caller_id) {
            return Err(AuthError::AccessDenied(
                caller_id,
                format!("User does not own event {}", event_id),
            )
            .into());
        }

        if let Some(other) = post_repo.find_by_event_id(event_id).await? {
            return Err(AppError::Conflict(format!(
                "Event {} is already attached to post {}",
                event_id, other.id
            )));
        }

        post_repo.set_event(id, Some(event_id)).await?;

        self.detail_after_write(id).await
    }

    /// Detaches the event from a post. The event itself is kept.
    ///
    /// # Returns
    /// - `Ok(PostDetail)` - The post without event
    /// - `Err(AppError::NotFound)` - The post does not exist
    /// - `Err(AppError::Conflict)` - The post has no event
    pub async fn detach_event(&self, id: i32) -> Result<PostDetail, AppError> {
        let post = self.require_post(id).await?;

        if post.event_id.is_none() {
            return Err(AppError::Conflict(format!("Post {} has no event", id)));
        }

        PostRepository::new(self.db).set_event(id, None).await?;

        self.detail_after_write(id).await
    }

    async fn require_post(&self, id: i32) -> Result<Post, AppError> {
        PostRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))
    }

    async fn detail_after_write(&self, id: i32) -> Result<PostDetail, AppError> {
        PostRepository::new(self.db)
            .get_detail(id)
            .await?
            .ok_or_else(|| InternalError::MissingAfterWrite { entity: "Post", id }.into())
    }
}
