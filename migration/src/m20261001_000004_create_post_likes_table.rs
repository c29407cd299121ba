use sea_orm_migration::{prelude::*, schema::*};

use super::{m20261001_000003_create_post_table::Post, m20261001_000001_create_user_table::User};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostLike::Table)
                    .if_not_exists()
                    .col(integer(PostLike::PostId))
                    .col(integer(PostLike::UserId))
                    .primary_key(
                        Index::create()
                            .col(PostLike::PostId)
                            .col(PostLike::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_likes_post_id")
                            .from(PostLike::Table, PostLike::PostId)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_likes_user_id")
                            .from(PostLike::Table, PostLike::UserId)
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
            .drop_table(Table::drop().table(PostLike::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PostLike {
    #[sea_orm(iden = "post_likes")]
    Table,
    PostId,
    UserId,
}
