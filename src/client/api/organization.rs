use crate::{
    client::{
        api::helper::{get, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::organization::{CreateOrganizationDto, OrganizationDto},
};

pub async fn get_organizations() -> Result<Vec<OrganizationDto>, ApiError> {
    let response = send_request(get("/api/organizations")).await?;
    parse_response(response).await
}

pub async fn create_organization(
    payload: &CreateOrganizationDto,
) -> Result<OrganizationDto, ApiError> {
    let body = serialize_json(payload)?;
    let response = send_request(post("/api/organizations").body(body)).await?;
    parse_response(response).await
}
