use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Hashing a password with argon2 failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to hash password: {0}")]
    PasswordHash(String),

    /// A row read back right after being written was missing.
    #[error("{entity} with id {id} not found after write")]
    MissingAfterWrite {
        /// Entity kind, e.g. "Post"
        entity: &'static str,
        /// Primary key that was written
        id: i32,
    },
}
