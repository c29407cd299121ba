use crate::server::{data::post::PostRepository, model::post::PostContentParam};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod likes;
mod set_event;

fn content(text: &str) -> PostContentParam {
    PostContentParam {
        content: text.to_string(),
        image: None,
    }
}
