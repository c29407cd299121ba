use crate::server::{data::comment::CommentRepository, model::comment::CommentContentParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_details_by_post_ids;
mod update;
