use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::maintenance::{MaintenanceDto, MaintenanceStatusDto},
    server::state::AppState,
};

/// Tag for grouping maintenance endpoints in OpenAPI documentation
pub static MAINTENANCE_TAG: &str = "maintenance";

/// Reports whether the application is in maintenance mode.
///
/// Public; the frontend polls it to decide whether to show the maintenance page.
#[utoipa::path(
    get,
    path = "/api/maintenance-status",
    tag = MAINTENANCE_TAG,
    responses(
        (status = 200, description = "Current maintenance flag", body = MaintenanceStatusDto)
    ),
)]
pub async fn get_maintenance_status(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MaintenanceStatusDto {
            data: MaintenanceDto {
                maintenance: state.maintenance_mode,
            },
        }),
    )
}
