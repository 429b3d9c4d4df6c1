//! Organizational hierarchy service.
//!
//! Edges are dated manager to employee relationships. Reads are point-in-time: an edge
//! counts on `date` when it is already effective and not yet ended. When an employee has
//! overlapping edges the most recently effective one names their manager. Reads only reach
//! members of the viewer's organization unless the viewer is a super admin.

use std::collections::{HashMap, HashSet, VecDeque};

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::UserSummaryDto,
    server::{
        data::{hierarchy::HierarchyRepository, user::UserRepository},
        error::AppError,
        model::{
            hierarchy::{CreateEdgeParams, HierarchyEdge, HierarchyNode},
            user::{summary_from_entity, User},
        },
    },
};

pub struct HierarchyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HierarchyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a manager to employee edge.
    ///
    /// Both users must belong to the edge's organization. Self-management and edges that
    /// would close a reporting loop with any edge overlapping the new edge's range are
    /// refused.
    ///
    /// # Returns
    /// - `Ok(HierarchyEdge)` - New edge
    /// - `Err(AppError::BadRequest)` - Unknown user, self-edge, or reporting loop
    pub async fn create(&self, params: CreateEdgeParams) -> Result<HierarchyEdge, AppError> {
        if params.manager_id == params.employee_id {
            return Err(AppError::BadRequest(
                "An employee cannot manage themselves".to_string(),
            ));
        }
        if params.end_date.is_some_and(|end| end <= params.effective_date) {
            return Err(AppError::BadRequest(
                "endDate must be after effectiveDate".to_string(),
            ));
        }

        let txn = self.db.begin().await?;

        let users = UserRepository::new(&txn)
            .find_by_ids(&[params.manager_id.clone(), params.employee_id.clone()])
            .await?;
        let in_organization = |id: &str| {
            users.iter().any(|u| {
                u.id == id && u.organization_id.as_deref() == Some(params.organization_id.as_str())
            })
        };
        if !in_organization(&params.manager_id) || !in_organization(&params.employee_id) {
            return Err(AppError::BadRequest(
                "Manager and employee must belong to the organization".to_string(),
            ));
        }

        let hierarchy_repo = HierarchyRepository::new(&txn);
        let edges = hierarchy_repo
            .find_overlapping(
                &params.organization_id,
                params.effective_date,
                params.end_date,
            )
            .await?;
        if would_create_loop(&edges, &params.manager_id, &params.employee_id) {
            return Err(AppError::BadRequest(
                "This relationship would create a reporting cycle".to_string(),
            ));
        }

        let edge = hierarchy_repo.create(params).await?;
        txn.commit().await?;

        Ok(HierarchyEdge::from_entity(edge))
    }

    /// Ends an edge. The edge stays in effect up to the day before `end_date`.
    pub async fn end(
        &self,
        organization_id: &str,
        id: &str,
        end_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<HierarchyEdge, AppError> {
        let txn = self.db.begin().await?;
        let hierarchy_repo = HierarchyRepository::new(&txn);

        let edge = find_in_organization(&hierarchy_repo, organization_id, id).await?;
        if end_date <= edge.effective_date {
            return Err(AppError::BadRequest(
                "endDate must be after effectiveDate".to_string(),
            ));
        }

        let Some(edge) = hierarchy_repo.end(id, end_date, today).await? else {
            return Err(not_found());
        };
        txn.commit().await?;

        Ok(HierarchyEdge::from_entity(edge))
    }

    pub async fn delete(&self, organization_id: &str, id: &str) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let hierarchy_repo = HierarchyRepository::new(&txn);

        find_in_organization(&hierarchy_repo, organization_id, id).await?;
        hierarchy_repo.delete(id).await?;
        txn.commit().await?;

        Ok(())
    }

    /// Finds an employee's manager on `date`.
    ///
    /// # Returns
    /// - `Ok(Some(summary))` - The manager in effect
    /// - `Ok(None)` - Nobody manages the employee on that date, or the employee is outside
    ///   the viewer's organization
    pub async fn get_manager(
        &self,
        viewer: &User,
        employee_id: &str,
        date: NaiveDate,
    ) -> Result<Option<UserSummaryDto>, AppError> {
        if !self.sees_member(viewer, employee_id).await? {
            return Ok(None);
        }

        let Some(edge) = HierarchyRepository::new(self.db)
            .find_manager_edge(employee_id, date)
            .await?
        else {
            return Ok(None);
        };

        Ok(UserRepository::new(self.db)
            .find_by_id(&edge.manager_id)
            .await?
            .filter(|manager| viewer.sees_organization(manager.organization_id.as_deref()))
            .as_ref()
            .map(summary_from_entity))
    }

    /// Lists a manager's direct reports on `date`, ordered by name.
    ///
    /// A manager outside the viewer's organization has no visible reports.
    pub async fn get_reports(
        &self,
        viewer: &User,
        manager_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<UserSummaryDto>, AppError> {
        if !self.sees_member(viewer, manager_id).await? {
            return Ok(Vec::new());
        }

        let edges = HierarchyRepository::new(self.db)
            .find_report_edges(manager_id, date)
            .await?;

        let mut ids: Vec<String> = edges.into_iter().map(|e| e.employee_id).collect();
        ids.sort();
        ids.dedup();

        let mut reports: Vec<UserSummaryDto> = UserRepository::new(self.db)
            .find_by_ids(&ids)
            .await?
            .iter()
            .filter(|report| viewer.sees_organization(report.organization_id.as_deref()))
            .map(summary_from_entity)
            .collect();
        reports.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(reports)
    }

    /// Builds the reporting forest of the viewer's organization on `date`.
    ///
    /// Roots are members with no manager in effect. Each user appears at most once.
    pub async fn get_tree(&self, viewer: &User, date: NaiveDate) -> Result<Vec<HierarchyNode>, AppError> {
        let Some(organization_id) = &viewer.organization_id else {
            return Ok(Vec::new());
        };

        let users = UserRepository::new(self.db)
            .find_by_organization(organization_id)
            .await?;
        let edges = HierarchyRepository::new(self.db)
            .find_in_effect(organization_id, date)
            .await?;

        Ok(build_tree(&users, &edges))
    }

    async fn sees_member(&self, viewer: &User, user_id: &str) -> Result<bool, AppError> {
        if viewer.is_super_admin() {
            return Ok(true);
        }

        let user = UserRepository::new(self.db).find_by_id(user_id).await?;

        Ok(user.is_some_and(|user| viewer.sees_organization(user.organization_id.as_deref())))
    }
}

async fn find_in_organization<C: sea_orm::ConnectionTrait>(
    repo: &HierarchyRepository<'_, C>,
    organization_id: &str,
    id: &str,
) -> Result<entity::organizational_hierarchy::Model, AppError> {
    match repo.find_by_id(id).await? {
        Some(edge) if edge.organization_id == organization_id => Ok(edge),
        _ => Err(not_found()),
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Hierarchy relationship not found".to_string())
}

/// Whether adding `manager_id -> employee_id` closes a loop.
///
/// Walks upward from the new manager through everyone who manages them; reaching the
/// employee means the employee already sits above the manager.
pub(crate) fn would_create_loop(
    edges: &[entity::organizational_hierarchy::Model],
    manager_id: &str,
    employee_id: &str,
) -> bool {
    let mut managers_of: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in edges {
        managers_of
            .entry(edge.employee_id.as_str())
            .or_default()
            .push(edge.manager_id.as_str());
    }

    let mut visited = HashSet::new();
    let mut queue = VecDeque::from([manager_id]);
    while let Some(current) = queue.pop_front() {
        if current == employee_id {
            return true;
        }
        if !visited.insert(current) {
            continue;
        }
        if let Some(managers) = managers_of.get(current) {
            queue.extend(managers.iter().copied());
        }
    }

    false
}

/// Assembles nodes for `users` from the edges in effect.
pub(crate) fn build_tree(
    users: &[entity::user::Model],
    edges: &[entity::organizational_hierarchy::Model],
) -> Vec<HierarchyNode> {
    let by_id: HashMap<&str, &entity::user::Model> =
        users.iter().map(|u| (u.id.as_str(), u)).collect();

    // One manager per employee: the most recently effective edge
    let mut manager_edge: HashMap<&str, &entity::organizational_hierarchy::Model> = HashMap::new();
    for edge in edges {
        if !by_id.contains_key(edge.manager_id.as_str()) {
            continue;
        }
        manager_edge
            .entry(edge.employee_id.as_str())
            .and_modify(|current| {
                if edge.effective_date > current.effective_date {
                    *current = edge;
                }
            })
            .or_insert(edge);
    }

    let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
    for (employee, edge) in &manager_edge {
        children
            .entry(edge.manager_id.as_str())
            .or_default()
            .push(*employee);
    }
    for list in children.values_mut() {
        list.sort_by_key(|id| by_id.get(id).map(|u| u.name.as_str()));
    }

    let mut visited = HashSet::new();
    let mut roots: Vec<&entity::user::Model> = users
        .iter()
        .filter(|u| !manager_edge.contains_key(u.id.as_str()))
        .collect();
    roots.sort_by(|a, b| a.name.cmp(&b.name));

    roots
        .into_iter()
        .filter_map(|root| node(root.id.as_str(), None, &by_id, &children, &mut visited))
        .collect()
}

fn node<'u>(
    id: &'u str,
    manager: Option<&'u str>,
    by_id: &HashMap<&'u str, &'u entity::user::Model>,
    children: &HashMap<&'u str, Vec<&'u str>>,
    visited: &mut HashSet<&'u str>,
) -> Option<HierarchyNode> {
    if !visited.insert(id) {
        return None;
    }
    let employee = by_id.get(id)?;

    let child_nodes = children
        .get(id)
        .map(|ids| {
            ids.iter()
                .filter_map(|child| node(*child, Some(id), by_id, children, visited))
                .collect()
        })
        .unwrap_or_default();

    Some(HierarchyNode {
        employee: summary_from_entity(employee),
        manager: manager
            .and_then(|m| by_id.get(m))
            .map(|m| summary_from_entity(m)),
        children: child_nodes,
    })
}
