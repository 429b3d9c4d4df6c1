use super::*;

/// Tests that edges whose end date has been reached are deactivated.
///
/// Expected: only the ended edge is deactivated
#[tokio::test]
async fn deactivates_only_ended_edges() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hierarchy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let org = factory::create_organization(db).await?;
    let manager = factory::user::UserFactory::new(db)
        .organization(&org.id)
        .build()
        .await?;
    let ended_report = factory::user::UserFactory::new(db)
        .organization(&org.id)
        .build()
        .await?;
    let current_report = factory::user::UserFactory::new(db)
        .organization(&org.id)
        .build()
        .await?;

    let ended = factory::hierarchy::EdgeFactory::new(db, &org.id, &manager.id, &ended_report.id)
        .effective(date(2024, 1, 1), Some(date(2024, 5, 1)))
        .build()
        .await?;
    let current =
        factory::hierarchy::EdgeFactory::new(db, &org.id, &manager.id, &current_report.id)
            .effective(date(2024, 1, 1), Some(date(2025, 1, 1)))
            .build()
            .await?;

    let count = HierarchyRepository::new(db)
        .deactivate_ended(date(2024, 5, 1))
        .await?;

    assert_eq!(count, 1);
    let ended = entity::prelude::OrganizationalHierarchy::find_by_id(ended.id)
        .one(db)
        .await?
        .unwrap();
    let current = entity::prelude::OrganizationalHierarchy::find_by_id(current.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!ended.is_active);
    assert!(current.is_active);

    Ok(())
}
