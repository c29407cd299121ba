use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000003_create_post_table::Post;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Poll::Table)
                    .if_not_exists()
                    .col(pk_auto(Poll::Id))
                    .col(integer(Poll::PostId).unique_key())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_post_id")
                            .from(Poll::Table, Poll::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Poll::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Poll {
    Table,
    Id,
    PostId,
}
