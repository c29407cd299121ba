use crate::server::{
    data::group::GroupRepository,
    model::group::{CreateGroupParam, MessageParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admins;
mod create;
mod members;
mod messages;
