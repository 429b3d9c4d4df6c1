use crate::{
    model::goal::GoalStatus,
    server::{
        data::goal::GoalRepository,
        model::goal::{CreateGoalParams, NewGoal},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;

fn params(feedback_id: &str, title: &str) -> CreateGoalParams {
    CreateGoalParams {
        feedback_id: feedback_id.to_string(),
        title: title.to_string(),
        description: None,
        category: None,
        priority: None,
        target_date: None,
        status: None,
        progress: None,
    }
}
