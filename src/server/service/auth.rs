use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{LoginParam, User},
    util::password::verify_password,
};

/// Service for email and password authentication.
///
/// Only checks credentials. Storing the resulting user in the session is left to the
/// controller, which owns the request's session.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks an email and password pair.
    ///
    /// Unknown emails and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials matched
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - No match
    pub async fn login(&self, param: LoginParam) -> Result<User, AppError> {
        let credentials = UserRepository::new(self.db)
            .find_credentials_by_email(&param.email)
            .await?;

        let Some((user, password_hash)) = credentials else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&param.password, &password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::debug!(user_id = user.id, "User logged in");

        Ok(user)
    }
}
