//! Reporting-line domain models.
//!
//! The hierarchy is a set of dated manager to employee edges rather than a tree: ended
//! edges stay in the table so past reporting lines can be queried.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{
    hierarchy::{CreateHierarchyEdgeDto, HierarchyEdgeDto, HierarchyNodeDto},
    user::UserSummaryDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyEdge {
    pub id: String,
    pub organization_id: String,
    pub manager_id: String,
    pub employee_id: String,
    pub effective_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl HierarchyEdge {
    pub fn from_entity(entity: entity::organizational_hierarchy::Model) -> Self {
        Self {
            id: entity.id,
            organization_id: entity.organization_id,
            manager_id: entity.manager_id,
            employee_id: entity.employee_id,
            effective_date: entity.effective_date,
            end_date: entity.end_date,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }

    /// Whether the edge is in effect on `date`. The end date is exclusive.
    ///
    /// An ended edge stays in effect for dates before its end even once deactivated.
    pub fn in_effect_on(&self, date: NaiveDate) -> bool {
        if self.effective_date > date {
            return false;
        }

        match self.end_date {
            Some(end) => date < end,
            None => self.is_active,
        }
    }

    pub fn into_dto(self) -> HierarchyEdgeDto {
        HierarchyEdgeDto {
            id: self.id,
            organization_id: self.organization_id,
            manager_id: self.manager_id,
            employee_id: self.employee_id,
            effective_date: self.effective_date,
            end_date: self.end_date,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEdgeParams {
    pub organization_id: String,
    pub manager_id: String,
    pub employee_id: String,
    pub effective_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl CreateEdgeParams {
    /// Converts a validated payload. Edges without an effective date start `today`.
    pub fn from_dto(organization_id: String, today: NaiveDate, dto: CreateHierarchyEdgeDto) -> Self {
        Self {
            organization_id,
            manager_id: dto.manager_id,
            employee_id: dto.employee_id,
            effective_date: dto.effective_date.unwrap_or(today),
            end_date: dto.end_date,
        }
    }
}

/// One employee in the reporting tree.
#[derive(Debug, Clone, PartialEq)]
pub struct HierarchyNode {
    pub employee: UserSummaryDto,
    pub manager: Option<UserSummaryDto>,
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    pub fn into_dto(self) -> HierarchyNodeDto {
        HierarchyNodeDto {
            employee: self.employee,
            manager: self.manager,
            children: self
                .children
                .into_iter()
                .map(HierarchyNode::into_dto)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(effective: NaiveDate, end: Option<NaiveDate>, is_active: bool) -> HierarchyEdge {
        HierarchyEdge {
            id: "e1".to_string(),
            organization_id: "o1".to_string(),
            manager_id: "m1".to_string(),
            employee_id: "u1".to_string(),
            effective_date: effective,
            end_date: end,
            is_active,
            created_at: Utc::now(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn open_ended_edge_is_in_effect_from_its_start() {
        let edge = edge(date(2025, 1, 1), None, true);

        assert!(!edge.in_effect_on(date(2024, 12, 31)));
        assert!(edge.in_effect_on(date(2025, 1, 1)));
        assert!(edge.in_effect_on(date(2030, 1, 1)));
    }

    #[test]
    fn end_date_is_exclusive() {
        let edge = edge(date(2025, 1, 1), Some(date(2025, 7, 1)), true);

        assert!(edge.in_effect_on(date(2025, 6, 30)));
        assert!(!edge.in_effect_on(date(2025, 7, 1)));
    }

    #[test]
    fn deactivated_edge_keeps_its_history() {
        let edge = edge(date(2024, 1, 1), Some(date(2024, 6, 1)), false);

        assert!(edge.in_effect_on(date(2024, 3, 15)));
        assert!(!edge.in_effect_on(date(2024, 6, 1)));
    }

    #[test]
    fn inactive_edge_is_never_in_effect() {
        let edge = edge(date(2025, 1, 1), None, false);

        assert!(!edge.in_effect_on(date(2025, 3, 1)));
    }
}
