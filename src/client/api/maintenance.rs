use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::maintenance::MaintenanceStatusDto,
};

pub async fn get_maintenance_status() -> Result<MaintenanceStatusDto, ApiError> {
    let response = send_request(get("/api/maintenance-status")).await?;
    parse_response(response).await
}
