//! Development goal domain models.
//!
//! Creation parameters keep optional fields optional; `GoalService` fills in the defaults
//! (priority, status, progress and target date) before anything reaches the repository.

use chrono::{DateTime, NaiveDate, Utc};

use crate::{
    model::goal::{CreateGoalDto, GoalDto, GoalPriority, GoalStatus, UpdateGoalDto},
    server::{
        error::AppError,
        util::parse::{parse_input, parse_stored},
    },
};

/// Progress recorded for a completed goal.
pub const COMPLETED_PROGRESS: i32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub id: String,
    pub feedback_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: GoalPriority,
    pub target_date: Option<NaiveDate>,
    pub status: GoalStatus,
    /// Completion percentage, 0 to 100.
    pub progress: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Goal {
    pub fn from_entity(entity: entity::goal::Model) -> Result<Self, AppError> {
        Ok(Self {
            priority: parse_stored("goal.priority", &entity.priority, GoalPriority::parse)?,
            status: parse_stored("goal.status", &entity.status, GoalStatus::parse)?,
            id: entity.id,
            feedback_id: entity.feedback_id,
            title: entity.title,
            description: entity.description,
            category: entity.category,
            target_date: entity.target_date,
            progress: entity.progress,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> GoalDto {
        GoalDto {
            id: self.id,
            feedback_id: self.feedback_id,
            title: self.title,
            description: self.description,
            category: self.category,
            priority: self.priority,
            target_date: self.target_date,
            status: self.status,
            progress: self.progress,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Goal creation request as received from the client.
#[derive(Debug, Clone)]
pub struct CreateGoalParams {
    pub feedback_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<GoalPriority>,
    pub target_date: Option<NaiveDate>,
    pub status: Option<GoalStatus>,
    pub progress: Option<i32>,
}

impl CreateGoalParams {
    pub fn from_dto(feedback_id: String, dto: CreateGoalDto) -> Result<Self, AppError> {
        Ok(Self {
            feedback_id,
            title: dto.title.trim().to_string(),
            description: dto.description,
            category: dto.category,
            priority: dto
                .priority
                .map(|p| parse_input("priority", &p, GoalPriority::parse))
                .transpose()?,
            target_date: dto.target_date,
            status: dto
                .status
                .map(|s| parse_input("status", &s, GoalStatus::parse))
                .transpose()?,
            progress: dto.progress,
        })
    }
}

/// Fully resolved goal, ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGoal {
    pub feedback_id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: GoalPriority,
    pub target_date: Option<NaiveDate>,
    pub status: GoalStatus,
    pub progress: i32,
}

impl NewGoal {
    /// Fills in defaults: medium priority, not started, zero progress and the cycle's end
    /// date as target. A completed goal always records full progress.
    pub fn with_defaults(params: CreateGoalParams, cycle_end_date: NaiveDate) -> Self {
        let status = params.status.unwrap_or(GoalStatus::NotStarted);
        let progress = if status == GoalStatus::Completed {
            COMPLETED_PROGRESS
        } else {
            params.progress.unwrap_or(0)
        };

        Self {
            feedback_id: params.feedback_id,
            title: params.title,
            description: params.description,
            category: params.category,
            priority: params.priority.unwrap_or(GoalPriority::Medium),
            target_date: Some(params.target_date.unwrap_or(cycle_end_date)),
            status,
            progress,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateGoalParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub priority: Option<GoalPriority>,
    pub target_date: Option<NaiveDate>,
    pub status: Option<GoalStatus>,
    pub progress: Option<i32>,
}

impl UpdateGoalParams {
    /// Converts a validated update. Setting the status to completed forces full progress.
    pub fn from_dto(dto: UpdateGoalDto) -> Result<Self, AppError> {
        let status = dto
            .status
            .map(|s| parse_input("status", &s, GoalStatus::parse))
            .transpose()?;
        let progress = match status {
            Some(GoalStatus::Completed) => Some(COMPLETED_PROGRESS),
            _ => dto.progress,
        };

        Ok(Self {
            title: dto.title.map(|t| t.trim().to_string()),
            description: dto.description,
            category: dto.category,
            priority: dto
                .priority
                .map(|p| parse_input("priority", &p, GoalPriority::parse))
                .transpose()?,
            target_date: dto.target_date,
            status,
            progress,
        })
    }

    /// Applies the update to a goal currently in `current` status.
    ///
    /// A goal that stays completed keeps full progress whatever progress the update sends.
    pub fn against(mut self, current: GoalStatus) -> Self {
        if self.status.unwrap_or(current) == GoalStatus::Completed {
            self.progress = Some(COMPLETED_PROGRESS);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> CreateGoalParams {
        CreateGoalParams {
            feedback_id: "f1".to_string(),
            title: "Lead a design review".to_string(),
            description: None,
            category: None,
            priority: None,
            target_date: None,
            status: None,
            progress: None,
        }
    }

    #[test]
    fn fills_defaults_from_cycle() {
        let end = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();

        let goal = NewGoal::with_defaults(params(), end);

        assert_eq!(goal.priority, GoalPriority::Medium);
        assert_eq!(goal.status, GoalStatus::NotStarted);
        assert_eq!(goal.progress, 0);
        assert_eq!(goal.target_date, Some(end));
    }

    #[test]
    fn keeps_explicit_values() {
        let end = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();
        let target = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let mut params = params();
        params.priority = Some(GoalPriority::High);
        params.target_date = Some(target);
        params.status = Some(GoalStatus::InProgress);
        params.progress = Some(40);

        let goal = NewGoal::with_defaults(params, end);

        assert_eq!(goal.priority, GoalPriority::High);
        assert_eq!(goal.target_date, Some(target));
        assert_eq!(goal.progress, 40);
    }

    #[test]
    fn completed_status_forces_full_progress() {
        let update = UpdateGoalParams::from_dto(UpdateGoalDto {
            status: Some("completed".to_string()),
            progress: Some(30),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(update.progress, Some(COMPLETED_PROGRESS));
    }

    #[test]
    fn completed_goal_keeps_full_progress() {
        let update = UpdateGoalParams {
            progress: Some(10),
            ..Default::default()
        };

        assert_eq!(
            update.clone().against(GoalStatus::Completed).progress,
            Some(COMPLETED_PROGRESS)
        );
        assert_eq!(update.against(GoalStatus::InProgress).progress, Some(10));
    }

    #[test]
    fn reopened_goal_takes_new_progress() {
        let update = UpdateGoalParams {
            status: Some(GoalStatus::InProgress),
            progress: Some(60),
            ..Default::default()
        };

        assert_eq!(update.against(GoalStatus::Completed).progress, Some(60));
    }
}
