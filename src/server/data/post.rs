//! Post data repository for database operations.
//!
//! Besides plain CRUD, the repository maintains the like set and the optional event
//! attachment of a post, and assembles [`PostDetail`] values with every relation a post
//! view may expose.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    data::{
        comment::CommentRepository,
        event::EventRepository,
        poll::PollRepository,
        user::{users_in_order, UserRepository},
    },
    model::post::{Post, PostContentParam, PostDetail},
};

pub struct PostRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PostRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a post published now.
    pub async fn create(&self, author_id: i32, param: PostContentParam) -> Result<Post, DbErr> {
        let entity = entity::post::ActiveModel {
            author_id: ActiveValue::Set(author_id),
            event_id: ActiveValue::Set(None),
            content: ActiveValue::Set(param.content),
            published_at: ActiveValue::Set(Utc::now()),
            image: ActiveValue::Set(param.image),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Post::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Post>, DbErr> {
        let entity = entity::prelude::Post::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Post::from_entity))
    }

    /// Finds the post an event is attached to.
    pub async fn find_by_event_id(&self, event_id: i32) -> Result<Option<Post>, DbErr> {
        let entity = entity::prelude::Post::find()
            .filter(entity::post::Column::EventId.eq(event_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Post::from_entity))
    }

    /// Replaces a post's content and image. The publication time is kept.
    ///
    /// # Returns
    /// - `Ok(Post)` - The updated post
    /// - `Err(DbErr::RecordNotFound)` - No post with that id
    pub async fn update(&self, id: i32, param: PostContentParam) -> Result<Post, DbErr> {
        let mut active_model = self.find_active_model(id).await?;
        active_model.content = ActiveValue::Set(param.content);
        active_model.image = ActiveValue::Set(param.image);

        let entity = active_model.update(self.db).await?;

        Ok(Post::from_entity(entity))
    }

    /// Attaches an event to a post, or detaches it with `None`.
    pub async fn set_event(&self, id: i32, event_id: Option<i32>) -> Result<Post, DbErr> {
        let mut active_model = self.find_active_model(id).await?;
        active_model.event_id = ActiveValue::Set(event_id);

        let entity = active_model.update(self.db).await?;

        Ok(Post::from_entity(entity))
    }

    /// Deletes a post. Comments, likes and the poll go with it.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Post::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Adds a like. Liking a post twice keeps a single like.
    pub async fn add_like(&self, post_id: i32, user_id: i32) -> Result<(), DbErr> {
        let existing = entity::prelude::PostLike::find_by_id((post_id, user_id))
            .one(self.db)
            .await?;

        if existing.is_none() {
            entity::post_like::ActiveModel {
                post_id: ActiveValue::Set(post_id),
                user_id: ActiveValue::Set(user_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Removes a like. Removing a like that does not exist is a no-op.
    pub async fn remove_like(&self, post_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::PostLike::delete_by_id((post_id, user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets a post with all of its relations.
    pub async fn get_detail(&self, id: i32) -> Result<Option<PostDetail>, DbErr> {
        let Some(post) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(self.load_details(vec![post]).await?.pop())
    }

    /// Gets every post with all of its relations, ordered by id.
    pub async fn get_all_details(&self) -> Result<Vec<PostDetail>, DbErr> {
        let posts = entity::prelude::Post::find()
            .order_by_asc(entity::post::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Post::from_entity)
            .collect();

        self.load_details(posts).await
    }

    async fn find_active_model(&self, id: i32) -> Result<entity::post::ActiveModel, DbErr> {
        let entity = entity::prelude::Post::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Post with id {} not found",
                id
            )))?;

        Ok(entity.into())
    }

    async fn load_details(&self, posts: Vec<Post>) -> Result<Vec<PostDetail>, DbErr> {
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        let post_ids: Vec<i32> = posts.iter().map(|p| p.id).collect();

        let likes = entity::prelude::PostLike::find()
            .filter(entity::post_like::Column::PostId.is_in(post_ids.iter().copied()))
            .order_by_asc(entity::post_like::Column::UserId)
            .all(self.db)
            .await?;
        let mut likers_by_post: HashMap<i32, Vec<i32>> = HashMap::new();
        for like in &likes {
            likers_by_post
                .entry(like.post_id)
                .or_default()
                .push(like.user_id);
        }

        // Authors and likers in one query
        let mut user_ids: Vec<i32> = posts.iter().map(|p| p.author_id).collect();
        user_ids.extend(likes.iter().map(|l| l.user_id));
        user_ids.sort_unstable();
        user_ids.dedup();
        let users = UserRepository::new(self.db).get_by_ids(&user_ids).await?;

        let mut comments = CommentRepository::new(self.db)
            .get_details_by_post_ids(&post_ids)
            .await?;
        let mut polls = PollRepository::new(self.db)
            .get_summaries_by_post_ids(&post_ids)
            .await?;

        let event_ids: Vec<i32> = posts.iter().filter_map(|p| p.event_id).collect();
        let mut events = EventRepository::new(self.db).get_by_ids(&event_ids).await?;

        posts
            .into_iter()
            .map(|post| {
                let author = users.get(&post.author_id).cloned().ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Author {} of post {} not found",
                        post.author_id, post.id
                    ))
                })?;
                let liked_by = likers_by_post
                    .get(&post.id)
                    .map(|ids| users_in_order(ids, &users))
                    .unwrap_or_default();

                Ok(PostDetail {
                    author,
                    liked_by,
                    comments: comments.remove(&post.id).unwrap_or_default(),
                    poll: polls.remove(&post.id),
                    event: post.event_id.and_then(|id| events.remove(&id)),
                    post,
                })
            })
            .collect()
    }
}
