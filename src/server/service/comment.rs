use sea_orm::DatabaseConnection;

use crate::server::{
    data::{comment::CommentRepository, post::PostRepository},
    error::{internal::InternalError, AppError},
    model::comment::{CommentContentParam, CommentDetail},
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<CommentDetail>, AppError> {
        Ok(CommentRepository::new(self.db).get_all_details().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<CommentDetail>, AppError> {
        Ok(CommentRepository::new(self.db).get_detail(id).await?)
    }

    /// Comments on a post as `author_id`.
    ///
    /// # Returns
    /// - `Ok(CommentDetail)` - The new comment
    /// - `Err(AppError::NotFound)` - The post does not exist
    pub async fn create(
        &self,
        post_id: i32,
        author_id: i32,
        param: CommentContentParam,
    ) -> Result<CommentDetail, AppError> {
        if PostRepository::new(self.db).find_by_id(post_id).await?.is_none() {
            return Err(AppError::NotFound(format!("Post {} not found", post_id)));
        }

        let comment = CommentRepository::new(self.db)
            .create(post_id, author_id, param)
            .await?;

        self.detail_after_write(comment.id).await
    }

    pub async fn update(
        &self,
        id: i32,
        param: CommentContentParam,
    ) -> Result<CommentDetail, AppError> {
        let repo = CommentRepository::new(self.db);
        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Comment {} not found", id)));
        }

        repo.update(id, param).await?;

        self.detail_after_write(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = CommentRepository::new(self.db);
        if repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(format!("Comment {} not found", id)));
        }

        Ok(repo.delete(id).await?)
    }

    async fn detail_after_write(&self, id: i32) -> Result<CommentDetail, AppError> {
        CommentRepository::new(self.db)
            .get_detail(id)
            .await?
            .ok_or_else(|| {
                InternalError::MissingAfterWrite {
                    entity: "Comment",
                    id,
                }
                .into()
            })
    }
}
