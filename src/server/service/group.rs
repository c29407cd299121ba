use sea_orm::DatabaseConnection;

use crate::server::{
    data::group::GroupRepository,
    error::{internal::InternalError, AppError},
    model::group::{CreateGroupParam, GroupDetail, MessageParam},
    service::require_user,
};

/// Group membership and messaging rules.
///
/// Every admin is a member. A group always keeps at least one admin: revoking the last
/// admin is refused with `409 Conflict`.
pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<GroupDetail>, AppError> {
        Ok(GroupRepository::new(self.db).get_all_details().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<GroupDetail>, AppError> {
        Ok(GroupRepository::new(self.db).get_detail(id).await?)
    }

    /// Creates a group with the creator as member and admin.
    pub async fn create(&self, param: CreateGroupParam) -> Result<GroupDetail, AppError> {
        let group = GroupRepository::new(self.db).create(param).await?;

        self.detail_after_write(group.id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.require_group(id).await?;

        Ok(GroupRepository::new(self.db).delete(id).await?)
    }

    pub async fn add_user(&self, id: i32, user_id: i32) -> Result<GroupDetail, AppError> {
        self.require_group(id).await?;
        require_user(self.db, user_id).await?;

        GroupRepository::new(self.db).add_member(id, user_id).await?;

        self.detail_after_write(id).await
    }

    /// Removes a member, revoking their admin rights as well.
    ///
    /// # Returns
    /// - `Ok(GroupDetail)` - The group without the user
    /// - `Err(AppError::NotFound)` - Group or user does not exist
    /// - `Err(AppError::Conflict)` - The user is the group's last admin
    pub async fn remove_user(&self, id: i32, user_id: i32) -> Result<GroupDetail, AppError> {
        self.require_group(id).await?;
        require_user(self.db, user_id).await?;

        if !GroupRepository::new(self.db)
            .remove_member(id, user_id)
            .await?
        {
            return Err(last_admin(id, user_id));
        }

        self.detail_after_write(id).await
    }

    /// Promotes a user to admin, adding them as member when needed.
    pub async fn add_admin(&self, id: i32, user_id: i32) -> Result<GroupDetail, AppError> {
        self.require_group(id).await?;
        require_user(self.db, user_id).await?;

        GroupRepository::new(self.db).add_admin(id, user_id).await?;

        self.detail_after_write(id).await
    }

    /// Revokes admin rights. The user stays a member.
    ///
    /// # Returns
    /// - `Ok(GroupDetail)` - The updated group
    /// - `Err(AppError::NotFound)` - Group or user does not exist
    /// - `Err(AppError::Conflict)` - The user is the group's last admin
    pub async fn remove_admin(&self, id: i32, user_id: i32) -> Result<GroupDetail, AppError> {
        self.require_group(id).await?;
        require_user(self.db, user_id).await?;

        if !GroupRepository::new(self.db)
            .remove_admin(id, user_id)
            .await?
        {
            return Err(last_admin(id, user_id));
        }

        self.detail_after_write(id).await
    }

    /// Posts a message as `author_id` and returns the group with its messages.
    pub async fn post_message(
        &self,
        id: i32,
        author_id: i32,
        param: MessageParam,
    ) -> Result<GroupDetail, AppError> {
        self.require_group(id).await?;

        GroupRepository::new(self.db)
            .add_message(id, author_id, param)
            .await?;

        self.detail_after_write(id).await
    }

    async fn require_group(&self, id: i32) -> Result<(), AppError> {
        match GroupRepository::new(self.db).find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!("Group {} not found", id))),
        }
    }

    async fn detail_after_write(&self, id: i32) -> Result<GroupDetail, AppError> {
        GroupRepository::new(self.db)
            .get_detail(id)
            .await?
            .ok_or_else(|| InternalError::MissingAfterWrite { entity: "Group", id }.into())
    }
}

fn last_admin(id: i32, user_id: i32) -> AppError {
    AppError::Conflict(format!(
        "User {} is the last admin of group {}",
        user_id, id
    ))
}
