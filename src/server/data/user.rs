//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records. Password hashes are
//! only read by `find_credentials_by_email`; every other query returns the `User` domain
//! model, which has no password field.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::User;

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `email` - Unique email address
    /// - `password_hash` - PHC formatted argon2 hash
    /// - `name` - Display name
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn create(
        &self,
        email: String,
        password_hash: String,
        name: String,
    ) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(email),
            password: ActiveValue::Set(password_hash),
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email together with their stored password hash.
    ///
    /// Used only by login.
    ///
    /// # Returns
    /// - `Ok(Some((User, String)))` - The user and their PHC password hash
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(User, String)>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(|e| {
            let password = e.password.clone();
            (User::from_entity(e), password)
        }))
    }

    /// Checks whether an email address is already registered.
    pub async fn email_exists(&self, email: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Gets all users ordered by id.
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Gets the users with the given ids, keyed by id.
    ///
    /// Ids with no matching user are absent from the map.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<HashMap<i32, User>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|e| (e.id, User::from_entity(e)))
            .collect())
    }

    /// Deletes a user.
    ///
    /// Foreign key cascades remove the user's posts, comments, messages, owned events,
    /// likes, votes and memberships.
    ///
    /// # Returns
    /// - `Ok(true)` - User was deleted
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}

/// Resolves ids against a user map loaded with [`UserRepository::get_by_ids`].
///
/// Ids missing from the map are skipped.
pub(crate) fn users_in_order(ids: &[i32], users: &HashMap<i32, User>) -> Vec<User> {
    ids.iter().filter_map(|id| users.get(id).cloned()).collect()
}
