use crate::server::data::hierarchy::HierarchyRepository;
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod deactivate_ended;
mod find_manager_edge;
mod find_overlapping;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
