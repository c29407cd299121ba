use sea_orm_migration::{prelude::*, schema::*};

use super::{m20261001_000002_create_event_table::Event, m20261001_000001_create_user_table::User};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventMember::Table)
                    .if_not_exists()
                    .col(integer(EventMember::EventId))
                    .col(integer(EventMember::UserId))
                    .primary_key(
                        Index::create()
                            .col(EventMember::EventId)
                            .col(EventMember::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_user_event_id")
                            .from(EventMember::Table, EventMember::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_user_user_id")
                            .from(EventMember::Table, EventMember::UserId)
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
            .drop_table(Table::drop().table(EventMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventMember {
    #[sea_orm(iden = "event_user")]
    Table,
    EventId,
    UserId,
}
