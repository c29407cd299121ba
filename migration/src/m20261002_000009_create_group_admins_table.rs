use sea_orm_migration::{prelude::*, schema::*};

use super::{m20261002_000007_create_group_table::Group, m20261001_000001_create_user_table::User};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GroupAdmin::Table)
                    .if_not_exists()
                    .col(integer(GroupAdmin::GroupId))
                    .col(integer(GroupAdmin::UserId))
                    .primary_key(
                        Index::create()
                            .col(GroupAdmin::GroupId)
                            .col(GroupAdmin::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_admins_group_id")
                            .from(GroupAdmin::Table, GroupAdmin::GroupId)
                            .to(Group::Table, Group::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_admins_user_id")
                            .from(GroupAdmin::Table, GroupAdmin::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GroupAdmin::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GroupAdmin {
    #[sea_orm(iden = "group_admins")]
    Table,
    GroupId,
    UserId,
}
