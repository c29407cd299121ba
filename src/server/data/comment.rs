//! Comment data repository for database operations.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::user::UserRepository,
    model::comment::{Comment, CommentContentParam, CommentDetail},
};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a comment on a post, published now.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment
    /// - `Err(DbErr)` - Database error, including a foreign key violation when the post
    ///   or author is missing
    pub async fn create(
        &self,
        post_id: i32,
        author_id: i32,
        param: CommentContentParam,
    ) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            author_id: ActiveValue::Set(author_id),
            post_id: ActiveValue::Set(post_id),
            message: ActiveValue::Set(param.message),
            published_at: ActiveValue::Set(Utc::now()),
            image: ActiveValue::Set(param.image),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Comment>, DbErr> {
        let entity = entity::prelude::Comment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Comment::from_entity))
    }

    /// Replaces a comment's message and image.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The updated comment
    /// - `Err(DbErr::RecordNotFound)` - No comment with that id
    pub async fn update(&self, id: i32, param: CommentContentParam) -> Result<Comment, DbErr> {
        let entity = entity::prelude::Comment::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Comment with id {} not found",
                id
            )))?;

        let mut active_model: entity::comment::ActiveModel = entity.into();
        active_model.message = ActiveValue::Set(param.message);
        active_model.image = ActiveValue::Set(param.image);

        let entity = active_model.update(self.db).await?;

        Ok(Comment::from_entity(entity))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Comment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets a comment with its author.
    pub async fn get_detail(&self, id: i32) -> Result<Option<CommentDetail>, DbErr> {
        let Some(comment) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(self.load_details(vec![comment]).await?.pop())
    }

    /// Gets every comment with its author, ordered by id.
    pub async fn get_all_details(&self) -> Result<Vec<CommentDetail>, DbErr> {
        let comments = entity::prelude::Comment::find()
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Comment::from_entity)
            .collect();

        self.load_details(comments).await
    }

    /// Gets the comments of several posts, keyed by post id.
    ///
    /// Comments within a post are ordered by publication time.
    pub async fn get_details_by_post_ids(
        &self,
        post_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<CommentDetail>>, DbErr> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let comments = entity::prelude::Comment::find()
            .filter(entity::comment::Column::PostId.is_in(post_ids.iter().copied()))
            .order_by_asc(entity::comment::Column::PublishedAt)
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Comment::from_entity)
            .collect();

        let mut by_post: HashMap<i32, Vec<CommentDetail>> = HashMap::new();
        for detail in self.load_details(comments).await? {
            by_post
                .entry(detail.comment.post_id)
                .or_default()
                .push(detail);
        }

        Ok(by_post)
    }

    async fn load_details(&self, comments: Vec<Comment>) -> Result<Vec<CommentDetail>, DbErr> {
        let author_ids: Vec<i32> = comments.iter().map(|c| c.author_id).collect();
        let authors = UserRepository::new(self.db).get_by_ids(&author_ids).await?;

        comments
            .into_iter()
            .map(|comment| {
                let author = authors.get(&comment.author_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Author {} of comment {} not found",
                        comment.author_id, comment.id
                    ))
                })?;
                Ok(CommentDetail { comment, author })
            })
            .collect()
    }
}
