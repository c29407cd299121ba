use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{validation::ValidationErrors, AppError},
    model::user::{RegisterUserParam, User},
    util::password::hash_password,
};

/// Message reported on `email` when the address is already registered.
pub const EMAIL_TAKEN: &str = "This email is already used.";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Validation)` - The email is already registered, including when a
    ///   concurrent registration wins the unique index
    /// - `Err(AppError::InternalErr)` - Password hashing failed
    pub async fn register(&self, param: RegisterUserParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.email_exists(&param.email).await? {
            return Err(ValidationErrors::single("email", &param.email, EMAIL_TAKEN).into());
        }

        let password_hash = hash_password(&param.password)?;
        let email = param.email.clone();
        let user = repo
            .create(param.email, password_hash, param.name)
            .await
            .map_err(|err| insert_error(err, &email))?;

        tracing::info!(user_id = user.id, "Registered user");

        Ok(user)
    }

    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(UserRepository::new(self.db).find_by_id(id).await?)
    }

    /// Deletes a user and everything that cascades from them.
    ///
    /// # Returns
    /// - `Ok(true)` - User was deleted
    /// - `Ok(false)` - No user with that id
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let deleted = UserRepository::new(self.db).delete(id).await?;

        if deleted {
            tracing::info!(user_id = id, "Deleted user");
        }

        Ok(deleted)
    }
}

/// Maps a failed user insert, turning a unique index hit on `email` into `EMAIL_TAKEN`.
pub(super) fn insert_error(err: DbErr, email: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            ValidationErrors::single("email", email, EMAIL_TAKEN).into()
        }
        _ => err.into(),
    }
}
