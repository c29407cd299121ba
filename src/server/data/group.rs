//! Group data repository for database operations.
//!
//! Membership and admin rows live in separate junction tables. The repository keeps them
//! consistent: every admin is also a member, and removing a member revokes their admin
//! rights.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::user::{users_in_order, UserRepository},
    model::group::{
        CreateGroupParam, Group, GroupDetail, Message, MessageDetail, MessageParam,
    },
};

pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a group with its creator as first member and admin.
    ///
    /// # Returns
    /// - `Ok(Group)` - The created group
    /// - `Err(DbErr)` - Database error; nothing is written in that case
    pub async fn create(&self, param: CreateGroupParam) -> Result<Group, DbErr> {
        let txn = self.db.begin().await?;

        let entity = entity::group::ActiveModel {
            name: ActiveValue::Set(param.name),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        insert_member(&txn, entity.id, param.creator_id).await?;
        insert_admin(&txn, entity.id, param.creator_id).await?;

        txn.commit().await?;

        Ok(Group::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::Group::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Group::from_entity))
    }

    /// Deletes a group. Messages, memberships and admin rows cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Group::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    pub async fn is_member(&self, group_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let row = entity::prelude::GroupUser::find_by_id((group_id, user_id))
            .one(self.db)
            .await?;

        Ok(row.is_some())
    }

    pub async fn is_admin(&self, group_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let row = entity::prelude::GroupAdmin::find_by_id((group_id, user_id))
            .one(self.db)
            .await?;

        Ok(row.is_some())
    }

    pub async fn admin_count(&self, group_id: i32) -> Result<u64, DbErr> {
        admin_count(self.db, group_id).await
    }

    /// Adds a member. Adding an existing member is a no-op.
    pub async fn add_member(&self, group_id: i32, user_id: i32) -> Result<(), DbErr> {
        insert_member(self.db, group_id, user_id).await
    }

    /// Removes a member and revokes their admin rights in the same transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - The user is no longer a member
    /// - `Ok(false)` - The user is the group's last admin; nothing was changed
    /// - `Err(DbErr)` - Database error
    pub async fn remove_member(&self, group_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        if !revoke_admin(&txn, group_id, user_id).await? {
            txn.rollback().await?;
            return Ok(false);
        }
        entity::prelude::GroupUser::delete_by_id((group_id, user_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(true)
    }

    /// Promotes a user to admin, making them a member first if needed.
    pub async fn add_admin(&self, group_id: i32, user_id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        insert_member(&txn, group_id, user_id).await?;
        insert_admin(&txn, group_id, user_id).await?;

        txn.commit().await
    }

    /// Revokes admin rights. Membership is kept.
    ///
    /// # Returns
    /// - `Ok(true)` - The user is not an admin anymore
    /// - `Ok(false)` - The user is the group's last admin; nothing was changed
    /// - `Err(DbErr)` - Database error
    pub async fn remove_admin(&self, group_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        if !revoke_admin(&txn, group_id, user_id).await? {
            txn.rollback().await?;
            return Ok(false);
        }

        txn.commit().await?;

        Ok(true)
    }

    /// Posts a message in a group.
    pub async fn add_message(
        &self,
        group_id: i32,
        author_id: i32,
        param: MessageParam,
    ) -> Result<Message, DbErr> {
        let entity = entity::message::ActiveModel {
            author_id: ActiveValue::Set(author_id),
            group_id: ActiveValue::Set(group_id),
            content: ActiveValue::Set(param.content),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Message::from_entity(entity))
    }

    /// Gets a group with its members, admins and messages.
    pub async fn get_detail(&self, id: i32) -> Result<Option<GroupDetail>, DbErr> {
        let Some(group) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(self.load_details(vec![group]).await?.pop())
    }

    /// Gets every group with its relations, ordered by id.
    pub async fn get_all_details(&self) -> Result<Vec<GroupDetail>, DbErr> {
        let groups = entity::prelude::Group::find()
            .order_by_asc(entity::group::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Group::from_entity)
            .collect();

        self.load_details(groups).await
    }

    async fn load_details(&self, groups: Vec<Group>) -> Result<Vec<GroupDetail>, DbErr> {
        if groups.is_empty() {
            return Ok(Vec::new());
        }

        let group_ids: Vec<i32> = groups.iter().map(|g| g.id).collect();

        let members = entity::prelude::GroupUser::find()
            .filter(entity::group_user::Column::GroupId.is_in(group_ids.iter().copied()))
            .order_by_asc(entity::group_user::Column::UserId)
            .all(self.db)
            .await?;
        let admins = entity::prelude::GroupAdmin::find()
            .filter(entity::group_admin::Column::GroupId.is_in(group_ids.iter().copied()))
            .order_by_asc(entity::group_admin::Column::UserId)
            .all(self.db)
            .await?;
        let messages: Vec<Message> = entity::prelude::Message::find()
            .filter(entity::message::Column::GroupId.is_in(group_ids.iter().copied()))
            .order_by_asc(entity::message::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Message::from_entity)
            .collect();

        let mut member_ids: HashMap<i32, Vec<i32>> = HashMap::new();
        for row in &members {
            member_ids.entry(row.group_id).or_default().push(row.user_id);
        }
        let mut admin_ids: HashMap<i32, Vec<i32>> = HashMap::new();
        for row in &admins {
            admin_ids.entry(row.group_id).or_default().push(row.user_id);
        }

        let mut user_ids: Vec<i32> = members.iter().map(|m| m.user_id).collect();
        user_ids.extend(admins.iter().map(|a| a.user_id));
        user_ids.extend(messages.iter().map(|m| m.author_id));
        user_ids.sort_unstable();
        user_ids.dedup();
        let users = UserRepository::new(self.db).get_by_ids(&user_ids).await?;

        let mut messages_by_group: HashMap<i32, Vec<MessageDetail>> = HashMap::new();
        for message in messages {
            let author = users.get(&message.author_id).cloned().ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "Author {} of message {} not found",
                    message.author_id, message.id
                ))
            })?;
            messages_by_group
                .entry(message.group_id)
                .or_default()
                .push(MessageDetail { message, author });
        }

        Ok(groups
            .into_iter()
            .map(|group| GroupDetail {
                users: member_ids
                    .get(&group.id)
                    .map(|ids| users_in_order(ids, &users))
                    .unwrap_or_default(),
                admins: admin_ids
                    .get(&group.id)
                    .map(|ids| users_in_order(ids, &users))
                    .unwrap_or_default(),
                messages: messages_by_group.remove(&group.id).unwrap_or_default(),
                group,
            })
            .collect())
    }
}

async fn insert_member<C: ConnectionTrait>(
    db: &C,
    group_id: i32,
    user_id: i32,
) -> Result<(), DbErr> {
    let existing = entity::prelude::GroupUser::find_by_id((group_id, user_id))
        .one(db)
        .await?;

    if existing.is_none() {
        entity::group_user::ActiveModel {
            group_id: ActiveValue::Set(group_id),
            user_id: ActiveValue::Set(user_id),
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

async fn insert_admin<C: ConnectionTrait>(
    db: &C,
    group_id: i32,
    user_id: i32,
) -> Result<(), DbErr> {
    let existing = entity::prelude::GroupAdmin::find_by_id((group_id, user_id))
        .one(db)
        .await?;

    if existing.is_none() {
        entity::group_admin::ActiveModel {
            group_id: ActiveValue::Set(group_id),
            user_id: ActiveValue::Set(user_id),
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

async fn admin_count<C: ConnectionTrait>(db: &C, group_id: i32) -> Result<u64, DbErr> {
    entity::prelude::GroupAdmin::find()
        .filter(entity::group_admin::Column::GroupId.eq(group_id))
        .count(db)
        .await
}

/// Deletes the admin row inside `txn`, then reports whether the group still has an admin.
///
/// Deleting first takes the write lock, so the count cannot race another revocation.
/// Returns `false` when the caller must roll back.
async fn revoke_admin<C: ConnectionTrait>(
    txn: &C,
    group_id: i32,
    user_id: i32,
) -> Result<bool, DbErr> {
    let deleted = entity::prelude::GroupAdmin::delete_by_id((group_id, user_id))
        .exec(txn)
        .await?;

    if deleted.rows_affected == 0 {
        return Ok(true);
    }

    Ok(admin_count(txn, group_id).await? > 0)
}
