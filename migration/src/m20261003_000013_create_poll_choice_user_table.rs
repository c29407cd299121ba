use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261003_000012_create_poll_choice_table::PollChoice,
    m20261001_000001_create_user_table::User,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PollVote::Table)
                    .if_not_exists()
                    .col(integer(PollVote::PollChoiceId))
                    .col(integer(PollVote::UserId))
                    .primary_key(
                        Index::create()
                            .col(PollVote::PollChoiceId)
                            .col(PollVote::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_choice_user_poll_choice_id")
                            .from(PollVote::Table, PollVote::PollChoiceId)
                            .to(PollChoice::Table, PollChoice::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_poll_choice_user_user_id")
                            .from(PollVote::Table, PollVote::UserId)
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
            .drop_table(Table::drop().table(PollVote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PollVote {
    #[sea_orm(iden = "poll_choice_user")]
    Table,
    PollChoiceId,
    UserId,
}
