use crate::server::{data::event::EventRepository, model::event::EventParam};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_detail;
mod members;

fn param(title: &str) -> EventParam {
    EventParam {
        title: title.to_string(),
        description: "Bring snacks".to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 5, 2).unwrap(),
    }
}
