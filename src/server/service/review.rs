//! Review views over feedback, plus review templates.
//!
//! "Assigned" reviews are the viewer's own drafts, "given" and "received" are everything past
//! draft in either direction.

use sea_orm::DatabaseConnection;

use crate::{
    model::feedback::{FeedbackStatus, ReviewType},
    server::{
        data::{
            cycle::CycleRepository, feedback::FeedbackRepository,
            review_template::ReviewTemplateRepository,
        },
        error::AppError,
        model::{
            feedback::{Feedback, FeedbackFilter},
            review::{CreateTemplateParams, Dashboard, ReviewTemplate},
            user::User,
        },
    },
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn assigned(&self, viewer: &User) -> Result<Vec<Feedback>, AppError> {
        self.list(assigned_filter(viewer)).await
    }

    pub async fn given(&self, viewer: &User) -> Result<Vec<Feedback>, AppError> {
        self.list(given_filter(viewer)).await
    }

    pub async fn received(&self, viewer: &User) -> Result<Vec<Feedback>, AppError> {
        self.list(received_filter(viewer)).await
    }

    /// Counts for the viewer's dashboard.
    ///
    /// `completed` counts reviews the viewer gave that are completed; `active_cycles` counts
    /// active cycles in the viewer's organization.
    pub async fn dashboard(&self, viewer: &User) -> Result<Dashboard, AppError> {
        let feedback_repo = FeedbackRepository::new(self.db);

        let completed = FeedbackFilter {
            from_user_id: Some(viewer.id.clone()),
            status: Some(FeedbackStatus::Completed),
            ..Default::default()
        };
        let active_cycles = match &viewer.organization_id {
            Some(organization_id) => {
                CycleRepository::new(self.db)
                    .count_active(Some(organization_id))
                    .await?
            }
            None => 0,
        };

        Ok(Dashboard {
            assigned: feedback_repo.count(&assigned_filter(viewer)).await?,
            given: feedback_repo.count(&given_filter(viewer)).await?,
            received: feedback_repo.count(&received_filter(viewer)).await?,
            completed: feedback_repo.count(&completed).await?,
            active_cycles,
        })
    }

    pub async fn get_templates(
        &self,
        review_type: Option<ReviewType>,
    ) -> Result<Vec<ReviewTemplate>, AppError> {
        ReviewTemplateRepository::new(self.db)
            .find_all(review_type)
            .await?
            .into_iter()
            .map(ReviewTemplate::from_entity)
            .collect()
    }

    /// # Returns
    /// - `Ok(ReviewTemplate)` - Template found
    /// - `Err(AppError::NotFound)` - No template with that ID
    pub async fn get_template(&self, id: &str) -> Result<ReviewTemplate, AppError> {
        match ReviewTemplateRepository::new(self.db).find_by_id(id).await? {
            Some(template) => ReviewTemplate::from_entity(template),
            None => Err(AppError::NotFound("Review template not found".to_string())),
        }
    }

    pub async fn create_template(
        &self,
        params: CreateTemplateParams,
    ) -> Result<ReviewTemplate, AppError> {
        let template = ReviewTemplateRepository::new(self.db).create(params).await?;

        ReviewTemplate::from_entity(template)
    }

    async fn list(&self, filter: FeedbackFilter) -> Result<Vec<Feedback>, AppError> {
        FeedbackRepository::new(self.db)
            .find_all(&filter)
            .await?
            .into_iter()
            .map(|(feedback, content)| Feedback::from_entity(feedback, content))
            .collect()
    }
}

fn assigned_filter(viewer: &User) -> FeedbackFilter {
    FeedbackFilter {
        from_user_id: Some(viewer.id.clone()),
        status: Some(FeedbackStatus::Draft),
        ..Default::default()
    }
}

fn given_filter(viewer: &User) -> FeedbackFilter {
    FeedbackFilter {
        from_user_id: Some(viewer.id.clone()),
        status_not: Some(FeedbackStatus::Draft),
        ..Default::default()
    }
}

fn received_filter(viewer: &User) -> FeedbackFilter {
    FeedbackFilter {
        to_user_id: Some(viewer.id.clone()),
        status_not: Some(FeedbackStatus::Draft),
        ..Default::default()
    }
}
