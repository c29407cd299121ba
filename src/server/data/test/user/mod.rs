use crate::server::data::user::UserRepository;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_credentials_by_email;
mod get_by_ids;
