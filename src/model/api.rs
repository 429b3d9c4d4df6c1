use serde::{Deserialize, Serialize};

/// Error body returned by every failing API call.
///
/// `details` is only present for validation failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    pub error: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldErrorDto>,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Vec::new(),
        }
    }
}

/// A single rejected field, named by its JSON path (e.g. `content.overallComment`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

impl FieldErrorDto {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Pagination query shared by list endpoints. Pages start at 1.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "server", into_params(parameter_in = Query))]
pub struct PageQueryDto {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 20;
pub const MAX_LIMIT: i64 = 100;
/// Highest page whose row offset still fits in an `i64` at the largest page size.
pub const MAX_PAGE: i64 = i64::MAX / MAX_LIMIT;

impl PageQueryDto {
    pub fn page(&self) -> u64 {
        self.page.map(|p| p.clamp(1, MAX_PAGE) as u64).unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u64 {
        self.limit
            .map(|l| l.clamp(1, MAX_LIMIT) as u64)
            .unwrap_or(DEFAULT_LIMIT)
    }
}
