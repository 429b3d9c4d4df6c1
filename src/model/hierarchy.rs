use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::model::user::UserSummaryDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct HierarchyEdgeDto {
    pub id: String,
    pub organization_id: String,
    pub manager_id: String,
    pub employee_id: String,
    pub effective_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// One employee in the reporting tree with their direct reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct HierarchyNodeDto {
    pub employee: UserSummaryDto,
    pub manager: Option<UserSummaryDto>,
    #[cfg_attr(feature = "server", schema(no_recursion))]
    pub children: Vec<HierarchyNodeDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CreateHierarchyEdgeDto {
    #[serde(default)]
    pub manager_id: String,
    #[serde(default)]
    pub employee_id: String,
    pub effective_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct EndHierarchyEdgeDto {
    pub end_date: Option<NaiveDate>,
}

/// Point in time for hierarchy reads. Defaults to today.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct HierarchyDateQueryDto {
    pub date: Option<NaiveDate>,
}
