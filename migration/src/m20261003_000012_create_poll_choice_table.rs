use sea_orm_migration::{prelude::*, schema::*};

use super::m20261003_000011_create_poll_table::Poll;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PollChoice::Table)
                    .if_not_exists()
                    .col(pk_auto(PollChoice::Id))
                    .col(integer(PollChoice::PollId))
                    .col(string(PollChoice::Title))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_choice_poll_id")
                            .from(PollChoice::Table, PollChoice::PollId)
                            .to(Poll::Table, Poll::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PollChoice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PollChoice {
    Table,
    Id,
    PollId,
    Title,
}
