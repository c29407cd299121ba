pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_user_table;
mod m20261001_000002_create_event_table;
mod m20261001_000003_create_post_table;
mod m20261001_000004_create_post_likes_table;
mod m20261001_000005_create_comment_table;
mod m20261001_000006_create_event_user_table;
mod m20261002_000007_create_group_table;
mod m20261002_000008_create_group_user_table;
mod m20261002_000009_create_group_admins_table;
mod m20261002_000010_create_message_table;
mod m20261003_000011_create_poll_table;
mod m20261003_000012_create_poll_choice_table;
mod m20261003_000013_create_poll_choice_user_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_user_table::Migration),
            Box::new(m20261001_000002_create_event_table::Migration),
            Box::new(m20261001_000003_create_post_table::Migration),
            Box::new(m20261001_000004_create_post_likes_table::Migration),
            Box::new(m20261001_000005_create_comment_table::Migration),
            Box::new(m20261001_000006_create_event_user_table::Migration),
            Box::new(m20261002_000007_create_group_table::Migration),
            Box::new(m20261002_000008_create_group_user_table::Migration),
            Box::new(m20261002_000009_create_group_admins_table::Migration),
            Box::new(m20261002_000010_create_message_table::Migration),
            Box::new(m20261003_000011_create_poll_table::Migration),
            Box::new(m20261003_000012_create_poll_choice_table::Migration),
            Box::new(m20261003_000013_create_poll_choice_user_table::Migration),
        ]
    }
}
