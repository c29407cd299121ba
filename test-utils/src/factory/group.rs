//! Group factory for creating test groups, memberships and messages.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test groups.
///
/// Members and admins listed on the factory are inserted together with the group.
/// Admins are also inserted as members.
///
/// # Example
///
/// ```rust,ignore
/// let group = GroupFactory::new(&db)
///     .admin(owner.id)
///     .member(friend.id)
///     .build()
///     .await?;
/// ```
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    members: Vec<i32>,
    admins: Vec<i32>,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory with name `"Group {id}"` and nobody in it.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Group {}", next_id()),
            members: Vec::new(),
            admins: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn member(mut self, user_id: i32) -> Self {
        self.members.push(user_id);
        self
    }

    pub fn admin(mut self, user_id: i32) -> Self {
        self.admins.push(user_id);
        self
    }

    /// Builds and inserts the group and its memberships.
    pub async fn build(self) -> Result<entity::group::Model, DbErr> {
        let group = entity::group::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut members = self.members;
        for admin_id in &self.admins {
            if !members.contains(admin_id) {
                members.push(*admin_id);
            }
        }

        for user_id in members {
            entity::group_user::ActiveModel {
                group_id: ActiveValue::Set(group.id),
                user_id: ActiveValue::Set(user_id),
            }
            .insert(self.db)
            .await?;
        }

        for user_id in self.admins {
            entity::group_admin::ActiveModel {
                group_id: ActiveValue::Set(group.id),
                user_id: ActiveValue::Set(user_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(group)
    }
}

/// Creates a group administered by the given user.
pub async fn create_group(
    db: &DatabaseConnection,
    admin_id: i32,
) -> Result<entity::group::Model, DbErr> {
    GroupFactory::new(db).admin(admin_id).build().await
}

/// Inserts a message into a group.
pub async fn create_message(
    db: &DatabaseConnection,
    group_id: i32,
    author_id: i32,
    content: impl Into<String>,
) -> Result<entity::message::Model, DbErr> {
    entity::message::ActiveModel {
        author_id: ActiveValue::Set(author_id),
        group_id: ActiveValue::Set(group_id),
        content: ActiveValue::Set(content.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
