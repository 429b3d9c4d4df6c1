use crate::{
    model::feedback::{FeedbackStatus, ReviewType},
    server::{
        data::feedback::FeedbackRepository,
        model::feedback::{CreateFeedbackParams, FeedbackContent, FeedbackFilter},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;

fn content(overall_comment: &str) -> FeedbackContent {
    FeedbackContent {
        overall_comment: overall_comment.to_string(),
        strengths: None,
        improvements: None,
    }
}
