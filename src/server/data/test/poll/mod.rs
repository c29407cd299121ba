use crate::server::{data::poll::PollRepository, model::poll::PollChoiceParam};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod cast_vote;
mod choices;
mod create;
mod get_detail;
