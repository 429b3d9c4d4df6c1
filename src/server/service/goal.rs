use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{cycle::CycleRepository, goal::GoalRepository},
    error::AppError,
    model::{
        goal::{CreateGoalParams, Goal, NewGoal, UpdateGoalParams},
        user::User,
    },
    service::feedback::{find_editable, find_visible},
};

pub struct GoalService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GoalService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_feedback(
        &self,
        viewer: &User,
        feedback_id: &str,
    ) -> Result<Vec<Goal>, AppError> {
        let feedback = find_visible(self.db, feedback_id, viewer).await?;

        GoalRepository::new(self.db)
            .find_by_feedback(&feedback.id)
            .await?
            .into_iter()
            .map(Goal::from_entity)
            .collect()
    }

    /// Creates a goal, filling unset fields from defaults and the owning cycle.
    ///
    /// Missing `priority` becomes `medium`, `status` becomes `not_started`, `progress`
    /// becomes 0 and `target_date` becomes the cycle's end date. The cycle is read in the
    /// same transaction that writes the goal.
    ///
    /// # Returns
    /// - `Ok(Goal)` - The stored goal
    /// - `Err(AppError::NotFound)` - Feedback is missing or hidden from `actor`
    /// - `Err(AppError::Forbidden)` - Actor did not write the feedback
    pub async fn create(&self, actor: &User, params: CreateGoalParams) -> Result<Goal, AppError> {
        let txn = self.db.begin().await?;

        let feedback = find_editable(&txn, &params.feedback_id, actor).await?;
        let Some(cycle) = CycleRepository::new(&txn).find_by_id(&feedback.cycle_id).await? else {
            return Err(AppError::InternalError(format!(
                "Feedback {} references missing cycle {}",
                feedback.id, feedback.cycle_id
            )));
        };

        let goal = GoalRepository::new(&txn)
            .create(NewGoal::with_defaults(params, cycle.end_date))
            .await?;
        txn.commit().await?;

        Goal::from_entity(goal)
    }

    /// Updates a goal. A goal that is and stays completed keeps 100 progress.
    pub async fn update(
        &self,
        actor: &User,
        id: &str,
        params: UpdateGoalParams,
    ) -> Result<Goal, AppError> {
        let txn = self.db.begin().await?;

        let goal_repo = GoalRepository::new(&txn);
        let Some(goal) = goal_repo.find_by_id(id).await? else {
            return Err(not_found());
        };
        find_editable(&txn, &goal.feedback_id, actor)
            .await
            .map_err(hide_parent)?;

        let current = Goal::from_entity(goal.clone())?;
        let goal = goal_repo.update(goal, params.against(current.status)).await?;
        txn.commit().await?;

        Goal::from_entity(goal)
    }

    pub async fn delete(&self, actor: &User, id: &str) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let goal_repo = GoalRepository::new(&txn);
        let Some(goal) = goal_repo.find_by_id(id).await? else {
            return Err(not_found());
        };
        find_editable(&txn, &goal.feedback_id, actor)
            .await
            .map_err(hide_parent)?;

        goal_repo.delete(id).await?;
        txn.commit().await?;

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Goal not found".to_string())
}

fn hide_parent(error: AppError) -> AppError {
    match error {
        AppError::NotFound(_) => not_found(),
        other => other,
    }
}
