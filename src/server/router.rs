use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, callback, get_user, google_login, login, logout},
        comment::{self, create_comment, delete_comment, get_comments, update_comment},
        cycle::{self, create_cycle, delete_cycle, get_cycle, get_cycles, update_cycle},
        feedback::{
            self, create_feedback, delete_feedback, get_feedback, get_feedback_list,
            update_feedback,
        },
        goal::{self, create_goal, delete_goal, get_goals, update_goal},
        hierarchy::{
            self, create_edge, delete_edge, end_edge, get_manager, get_reports, get_tree,
        },
        maintenance::{self, get_maintenance_status},
        organization::{self, create_organization, get_organizations},
        rating::{self, create_rating, delete_rating, get_ratings, update_rating},
        review::{
            self, complete_review, create_template, get_assigned, get_dashboard, get_given,
            get_received, get_template, get_templates,
        },
        user::{self, get_all_users, update_user_roles},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Feedback Cycle API"),
    paths(
        auth::login,
        auth::callback,
        auth::google_login,
        auth::get_user,
        auth::logout,
        maintenance::get_maintenance_status,
        feedback::create_feedback,
        feedback::get_feedback_list,
        feedback::get_feedback,
        feedback::update_feedback,
        feedback::delete_feedback,
        comment::get_comments,
        comment::create_comment,
        comment::update_comment,
        comment::delete_comment,
        rating::get_ratings,
        rating::create_rating,
        rating::update_rating,
        rating::delete_rating,
        goal::get_goals,
        goal::create_goal,
        goal::update_goal,
        goal::delete_goal,
        review::get_assigned,
        review::get_given,
        review::get_received,
        review::get_dashboard,
        review::complete_review,
        review::get_templates,
        review::get_template,
        review::create_template,
        cycle::get_cycles,
        cycle::get_cycle,
        cycle::create_cycle,
        cycle::update_cycle,
        cycle::delete_cycle,
        hierarchy::create_edge,
        hierarchy::end_edge,
        hierarchy::delete_edge,
        hierarchy::get_manager,
        hierarchy::get_reports,
        hierarchy::get_tree,
        user::get_all_users,
        user::update_user_roles,
        organization::get_organizations,
        organization::create_organization,
    ),
    tags(
        (name = auth::AUTH_TAG, description = "Google sign-in and session"),
        (name = maintenance::MAINTENANCE_TAG, description = "Maintenance flag"),
        (name = feedback::FEEDBACK_TAG, description = "Feedback records"),
        (name = comment::COMMENT_TAG, description = "Comments on feedback"),
        (name = rating::RATING_TAG, description = "Ratings on feedback"),
        (name = goal::GOAL_TAG, description = "Goals on feedback"),
        (name = review::REVIEW_TAG, description = "Review workflow and templates"),
        (name = cycle::CYCLE_TAG, description = "Review cycles"),
        (name = hierarchy::HIERARCHY_TAG, description = "Reporting relationships"),
        (name = user::USER_TAG, description = "User administration"),
        (name = organization::ORGANIZATION_TAG, description = "Organizations"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", get(login))
        .route("/api/auth/callback", get(callback))
        .route("/api/auth/google", post(google_login))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
        .route("/api/maintenance-status", get(get_maintenance_status))
        .route("/api/feedback", post(create_feedback).get(get_feedback_list))
        .route(
            "/api/feedback/{id}",
            get(get_feedback).put(update_feedback).delete(delete_feedback),
        )
        .route(
            "/api/feedback/{id}/comments",
            get(get_comments).post(create_comment),
        )
        .route(
            "/api/feedback/{id}/comments/{comment_id}",
            put(update_comment).delete(delete_comment),
        )
        .route(
            "/api/feedback/{id}/ratings",
            get(get_ratings).post(create_rating),
        )
        .route("/api/ratings/{id}", put(update_rating).delete(delete_rating))
        .route("/api/feedback/{id}/goals", get(get_goals).post(create_goal))
        .route("/api/goals/{id}", put(update_goal).delete(delete_goal))
        .route("/api/reviews/assigned", get(get_assigned))
        .route("/api/reviews/given", get(get_given))
        .route("/api/reviews/received", get(get_received))
        .route("/api/reviews/dashboard", get(get_dashboard))
        .route("/api/reviews/{id}/complete", post(complete_review))
        .route(
            "/api/reviews/templates",
            get(get_templates).post(create_template),
        )
        .route("/api/reviews/templates/{id}", get(get_template))
        .route("/api/cycles", get(get_cycles).post(create_cycle))
        .route(
            "/api/cycles/{id}",
            get(get_cycle).put(update_cycle).delete(delete_cycle),
        )
        .route("/api/hierarchy", post(create_edge))
        .route("/api/hierarchy/tree", get(get_tree))
        .route("/api/hierarchy/{id}", axum::routing::delete(delete_edge))
        .route("/api/hierarchy/{id}/end", put(end_edge))
        .route("/api/hierarchy/{id}/manager", get(get_manager))
        .route("/api/hierarchy/{id}/reports", get(get_reports))
        .route("/api/users", get(get_all_users))
        .route("/api/users/{id}/roles", put(update_user_roles))
        .route(
            "/api/organizations",
            get(get_organizations).post(create_organization),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}
