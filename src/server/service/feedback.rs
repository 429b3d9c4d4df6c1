//! Feedback service.
//!
//! Owns the rules around who may see and change a feedback record. Feedback is visible to
//! its giver, its receiver, the receiver's current manager and the admins of the cycle's
//! organization. Everyone else gets a 404 so record ids do not leak.

use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{cycle::CycleStatus, feedback::FeedbackStatus},
    server::{
        data::{
            cycle::CycleRepository, feedback::FeedbackRepository, goal::GoalRepository,
            hierarchy::HierarchyRepository, rating::RatingRepository, user::UserRepository,
        },
        error::AppError,
        model::{
            cycle::Cycle,
            feedback::{
                CreateFeedbackParams, Feedback, FeedbackDetail, FeedbackFilter, PaginatedFeedback,
                UpdateFeedbackParams,
            },
            goal::Goal,
            rating::Rating,
            user::User,
        },
        util::pagination::total_pages,
    },
};

/// Loads a feedback record the viewer is allowed to see.
///
/// # Returns
/// - `Ok(Feedback)` - Record exists and is visible to `viewer`
/// - `Err(AppError::NotFound)` - Record is missing or hidden from `viewer`
pub(crate) async fn find_visible<C: ConnectionTrait>(
    db: &C,
    feedback_id: &str,
    viewer: &User,
) -> Result<Feedback, AppError> {
    let Some((feedback, content)) = FeedbackRepository::new(db).find_by_id(feedback_id).await?
    else {
        return Err(not_found());
    };
    let feedback = Feedback::from_entity(feedback, content)?;

    if feedback.involves(&viewer.id) || administers(db, &feedback, viewer).await? {
        return Ok(feedback);
    }

    let manages_receiver = HierarchyRepository::new(db)
        .find_manager_edge(&feedback.to_user_id, Utc::now().date_naive())
        .await?
        .is_some_and(|edge| edge.manager_id == viewer.id);

    if manages_receiver {
        Ok(feedback)
    } else {
        Err(not_found())
    }
}

/// Whether `viewer` is an admin of the organization that owns `feedback`'s cycle.
pub(crate) async fn administers<C: ConnectionTrait>(
    db: &C,
    feedback: &Feedback,
    viewer: &User,
) -> Result<bool, AppError> {
    if viewer.is_super_admin() {
        return Ok(true);
    }
    if !viewer.is_admin() {
        return Ok(false);
    }

    let cycle = CycleRepository::new(db).find_by_id(&feedback.cycle_id).await?;

    Ok(cycle.is_some_and(|cycle| viewer.administers(&cycle.organization_id)))
}

/// Whether `viewer` may read private comments on `feedback`.
pub(crate) async fn sees_private_comments<C: ConnectionTrait>(
    db: &C,
    feedback: &Feedback,
    viewer: &User,
) -> Result<bool, AppError> {
    Ok(feedback.involves(&viewer.id) || administers(db, feedback, viewer).await?)
}

/// Loads a feedback record the actor may attach ratings or goals to.
///
/// # Returns
/// - `Ok(Feedback)` - Actor is the giver or an admin and the record is not completed
/// - `Err(AppError::NotFound)` - Record is missing or hidden from `actor`
/// - `Err(AppError::Forbidden)` - Actor can see the record but did not write it
/// - `Err(AppError::BadRequest)` - Record is already completed
pub(crate) async fn find_editable<C: ConnectionTrait>(
    db: &C,
    feedback_id: &str,
    actor: &User,
) -> Result<Feedback, AppError> {
    let feedback = find_visible(db, feedback_id, actor).await?;

    if feedback.from_user_id != actor.id && !administers(db, &feedback, actor).await? {
        return Err(AppError::Forbidden(
            "Only the author of this feedback can change it".to_string(),
        ));
    }
    if feedback.status == FeedbackStatus::Completed {
        return Err(AppError::BadRequest(
            "Completed feedback cannot be modified".to_string(),
        ));
    }

    Ok(feedback)
}

fn not_found() -> AppError {
    AppError::NotFound("Feedback not found".to_string())
}

pub struct FeedbackService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedbackService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a draft feedback record together with its content.
    ///
    /// Both rows are written in one transaction. The cycle must exist and be active, the
    /// receiver must exist, and the `(cycle, giver, receiver, review type)` tuple must be new.
    /// Unless `actor` is a super admin, the cycle and the receiver must belong to the actor's
    /// organization.
    ///
    /// # Returns
    /// - `Ok(Feedback)` - The new draft
    /// - `Err(AppError::BadRequest)` - Unknown, inactive or foreign cycle, or unknown or
    ///   foreign receiver
    /// - `Err(AppError::Conflict)` - The same feedback already exists
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        actor: &User,
        params: CreateFeedbackParams,
    ) -> Result<Feedback, AppError> {
        let txn = self.db.begin().await?;

        let Some(cycle) = CycleRepository::new(&txn).find_by_id(&params.cycle_id).await? else {
            return Err(AppError::BadRequest("Cycle does not exist".to_string()));
        };
        let cycle = Cycle::from_entity(cycle)?;
        if !actor.is_super_admin()
            && actor.organization_id.as_deref() != Some(cycle.organization_id.as_str())
        {
            return Err(AppError::BadRequest("Cycle does not exist".to_string()));
        }
        if cycle.status != CycleStatus::Active {
            return Err(AppError::BadRequest(
                "Feedback can only be given in an active cycle".to_string(),
            ));
        }

        let receiver = UserRepository::new(&txn)
            .find_by_id(&params.to_user_id)
            .await?;
        let in_cycle_organization = receiver.is_some_and(|user| {
            user.organization_id.as_deref() == Some(cycle.organization_id.as_str())
        });
        if !in_cycle_organization {
            return Err(AppError::BadRequest("Receiving user does not exist".to_string()));
        }

        let feedback_repo = FeedbackRepository::new(&txn);
        if feedback_repo.find_duplicate(&params).await?.is_some() {
            return Err(AppError::Conflict(
                "Feedback of this type for this user already exists in this cycle".to_string(),
            ));
        }

        let (feedback, content) = feedback_repo.create(params).await?;
        txn.commit().await?;

        Feedback::from_entity(feedback, content)
    }

    /// Lists feedback matching `filter`, restricted to what `viewer` may see.
    pub async fn get_paginated(
        &self,
        viewer: &User,
        mut filter: FeedbackFilter,
        page: u64,
        limit: u64,
    ) -> Result<PaginatedFeedback, AppError> {
        match &viewer.organization_id {
            _ if viewer.is_super_admin() => {}
            Some(organization_id) if viewer.is_admin() => {
                filter.organization_id = Some(organization_id.clone());
            }
            _ => filter.involving_user_id = Some(viewer.id.clone()),
        }

        let (rows, total) = FeedbackRepository::new(self.db)
            .get_paginated(&filter, page, limit)
            .await?;

        let feedback = rows
            .into_iter()
            .map(|(feedback, content)| Feedback::from_entity(feedback, content))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PaginatedFeedback {
            feedback,
            total,
            page,
            limit,
            total_pages: total_pages(total, limit),
        })
    }

    /// Loads a feedback record with its ratings and goals.
    pub async fn get_detail(&self, viewer: &User, id: &str) -> Result<FeedbackDetail, AppError> {
        let feedback = find_visible(self.db, id, viewer).await?;

        let ratings = RatingRepository::new(self.db)
            .find_by_feedback(&feedback.id)
            .await?
            .into_iter()
            .map(Rating::from_entity)
            .collect();
        let goals = GoalRepository::new(self.db)
            .find_by_feedback(&feedback.id)
            .await?
            .into_iter()
            .map(Goal::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(FeedbackDetail {
            feedback,
            ratings,
            goals,
        })
    }

    /// Updates status or content. Only the giver may do this, and only before completion.
    ///
    /// # Returns
    /// - `Ok(Feedback)` - Updated record
    /// - `Err(AppError::NotFound)` - Missing or hidden record
    /// - `Err(AppError::Forbidden)` - Actor is not the giver
    /// - `Err(AppError::BadRequest)` - Record is completed or the status would move backwards
    pub async fn update(
        &self,
        actor: &User,
        id: &str,
        params: UpdateFeedbackParams,
    ) -> Result<Feedback, AppError> {
        let txn = self.db.begin().await?;

        let feedback = find_visible(&txn, id, actor).await?;
        if feedback.from_user_id != actor.id {
            return Err(AppError::Forbidden(
                "Only the author of this feedback can edit it".to_string(),
            ));
        }
        if feedback.status == FeedbackStatus::Completed {
            return Err(AppError::BadRequest(
                "Completed feedback cannot be modified".to_string(),
            ));
        }
        if params.status == Some(FeedbackStatus::Completed) {
            return Err(AppError::BadRequest(
                "Use the complete endpoint to complete feedback".to_string(),
            ));
        }
        if feedback.status == FeedbackStatus::Submitted && params.status == Some(FeedbackStatus::Draft)
        {
            return Err(AppError::BadRequest(
                "Submitted feedback cannot return to draft".to_string(),
            ));
        }

        let Some((feedback, content)) = FeedbackRepository::new(&txn).update(id, params).await?
        else {
            return Err(not_found());
        };
        txn.commit().await?;

        Feedback::from_entity(feedback, content)
    }

    /// Marks a draft or submitted record as completed. Only the giver may do this.
    pub async fn complete(&self, actor: &User, id: &str) -> Result<Feedback, AppError> {
        let txn = self.db.begin().await?;

        let feedback = find_visible(&txn, id, actor).await?;
        if feedback.from_user_id != actor.id {
            return Err(AppError::Forbidden(
                "Only the author of this feedback can complete it".to_string(),
            ));
        }
        if feedback.status == FeedbackStatus::Completed {
            return Err(AppError::BadRequest(
                "Feedback is already completed".to_string(),
            ));
        }

        let params = UpdateFeedbackParams {
            status: Some(FeedbackStatus::Completed),
            ..Default::default()
        };
        let Some((feedback, content)) = FeedbackRepository::new(&txn).update(id, params).await?
        else {
            return Err(not_found());
        };
        txn.commit().await?;

        Feedback::from_entity(feedback, content)
    }

    /// Deletes a record with its content, comments, ratings and goals. Giver or admin.
    pub async fn delete(&self, actor: &User, id: &str) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let feedback = find_visible(&txn, id, actor).await?;
        if feedback.from_user_id != actor.id && !administers(&txn, &feedback, actor).await? {
            return Err(AppError::Forbidden(
                "Only the author of this feedback can delete it".to_string(),
            ));
        }

        FeedbackRepository::new(&txn).delete(id).await?;
        txn.commit().await?;

        Ok(())
    }
}
