//! Authentication and ownership guard.
//!
//! Controllers build an [`AuthGuard`] from the request's database connection and session,
//! then call [`AuthGuard::require`] with the permissions the operation needs. The guard
//! resolves the logged-in user and checks each permission in order. Failures are reported
//! in a fixed precedence: no session user is `401`, a missing resource is `404`, a failed
//! check is `403`.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{
        comment::CommentRepository, event::EventRepository, group::GroupRepository,
        poll::PollRepository, post::PostRepository, user::UserRepository,
    },
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// A condition the logged-in user must satisfy.
///
/// Each variant carries the id of the resource it refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// The logged-in user is the user with this id.
    SelfUser(i32),
    /// The logged-in user wrote the post.
    PostAuthor(i32),
    /// The logged-in user wrote the comment.
    CommentAuthor(i32),
    /// The logged-in user owns the event.
    EventOwner(i32),
    /// The logged-in user belongs to the group.
    GroupMember(i32),
    /// The logged-in user administers the group.
    GroupAdmin(i32),
    /// The logged-in user wrote the post the poll is attached to.
    PollOwner(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the logged-in user and checks every permission.
    ///
    /// # Arguments
    /// - `permissions` - Conditions to verify, checked in order; empty only requires a login
    ///
    /// # Returns
    /// - `Ok(User)` - The logged-in user, all permissions satisfied
    /// - `Err(AppError::AuthErr(UserNotInSession))` - Nobody is logged in
    /// - `Err(AppError::AuthErr(UserNotInDatabase))` - The session user was deleted
    /// - `Err(AppError::NotFound)` - A resource named by a permission does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            self.check(&user, *permission).await?;
        }

        Ok(user)
    }

    async fn check(&self, user: &User, permission: Permission) -> Result<(), AppError> {
        let allowed = match permission {
            Permission::SelfUser(id) => {
                UserRepository::new(self.db)
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| not_found("User", id))?;
                user.id == id
            }
            Permission::PostAuthor(id) => {
                let post = PostRepository::new(self.db)
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| not_found("Post", id))?;
                post.author_id == user.id
            }
            Permission::CommentAuthor(id) => {
                let comment = CommentRepository::new(self.db)
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| not_found("Comment", id))?;
                comment.author_id == user.id
            }
            Permission::EventOwner(id) => {
                let event = EventRepository::new(self.db)
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| not_found("Event", id))?;
                event.is_owned_by(user.id)
            }
            Permission::GroupMember(id) => {
                let group_repo = GroupRepository::new(self.db);
                group_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| not_found("Group", id))?;
                group_repo.is_member(id, user.id).await?
            }
            Permission::GroupAdmin(id) => {
                let group_repo = GroupRepository::new(self.db);
                group_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| not_found("Group", id))?;
                group_repo.is_admin(id, user.id).await?
            }
            Permission::PollOwner(id) => {
                let poll = PollRepository::new(self.db)
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| not_found("Poll", id))?;
                let post = PostRepository::new(self.db)
                    .find_by_id(poll.post_id)
                    .await?
                    .ok_or_else(|| not_found("Post", poll.post_id))?;
                post.author_id == user.id
            }
        };

        if allowed {
            Ok(())
        } else {
            Err(AuthError::AccessDenied(user.id, denial_reason(permission)).into())
        }
    }
}

fn not_found(resource: &str, id: i32) -> AppError {
    AppError::NotFound(format!("{} {} not found", resource, id))
}

fn denial_reason(permission: Permission) -> String {
    match permission {
        Permission::SelfUser(id) => {
            format!("User may only act on their own account, not user {}", id)
        }
        Permission::PostAuthor(id) => format!("User is not the author of post {}", id),
        Permission::CommentAuthor(id) => format!("User is not the author of comment {}", id),
        Permission::EventOwner(id) => format!("User does not own event {}", id),
        Permission::GroupMember(id) => format!("User is not a member of group {}", id),
        Permission::GroupAdmin(id) => format!("User is not an admin of group {}", id),
        Permission::PollOwner(id) => {
            format!("User is not the author of the post holding poll {}", id)
        }
    }
}
