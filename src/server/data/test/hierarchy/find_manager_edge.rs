use super::*;

/// Tests resolving an employee's manager at different points in time.
///
/// The employee reported to the first manager until 2024-06-01 and to the second from then.
///
/// Expected: each date resolves to the manager in effect, before any edge resolves to none
#[tokio::test]
async fn resolves_manager_on_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hierarchy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let org = factory::create_organization(db).await?;
    let employee = factory::user::UserFactory::new(db)
        .organization(&org.id)
        .build()
        .await?;
    let first = factory::user::UserFactory::new(db)
        .organization(&org.id)
        .build()
        .await?;
    let second = factory::user::UserFactory::new(db)
        .organization(&org.id)
        .build()
        .await?;

    factory::hierarchy::EdgeFactory::new(db, &org.id, &first.id, &employee.id)
        .effective(date(2024, 1, 1), Some(date(2024, 6, 1)))
        .build()
        .await?;
    factory::hierarchy::EdgeFactory::new(db, &org.id, &second.id, &employee.id)
        .effective(date(2024, 6, 1), None)
        .build()
        .await?;

    let repo = HierarchyRepository::new(db);
    let manager_on = |edge: Option<entity::organizational_hierarchy::Model>| {
        edge.map(|e| e.manager_id)
    };

    assert_eq!(
        manager_on(repo.find_manager_edge(&employee.id, date(2024, 3, 15)).await?),
        Some(first.id.clone())
    );
    assert_eq!(
        manager_on(repo.find_manager_edge(&employee.id, date(2024, 6, 1)).await?),
        Some(second.id.clone())
    );
    assert_eq!(
        manager_on(repo.find_manager_edge(&employee.id, date(2023, 12, 31)).await?),
        None
    );

    Ok(())
}

/// Tests that inactive edges are never in effect.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_inactive_edges() -> Result<(), DbErr> {
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
    let employee = factory::user::UserFactory::new(db)
        .organization(&org.id)
        .build()
        .await?;

    factory::hierarchy::EdgeFactory::new(db, &org.id, &manager.id, &employee.id)
        .active(false)
        .build()
        .await?;

    let edge = HierarchyRepository::new(db)
        .find_manager_edge(&employee.id, date(2024, 1, 1))
        .await?;

    assert!(edge.is_none());

    Ok(())
}

/// Tests that ending an edge keeps it for dates inside its range.
///
/// Expected: the manager resolves before the end date and not after it
#[tokio::test]
async fn ended_edge_still_resolves_in_the_past() -> Result<(), DbErr> {
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
    let employee = factory::user::UserFactory::new(db)
        .organization(&org.id)
        .build()
        .await?;
    let edge = factory::hierarchy::EdgeFactory::new(db, &org.id, &manager.id, &employee.id)
        .effective(date(2024, 1, 1), None)
        .build()
        .await?;

    let repo = HierarchyRepository::new(db);
    let ended = repo
        .end(&edge.id, date(2024, 6, 1), date(2025, 1, 1))
        .await?
        .unwrap();
    assert!(!ended.is_active);

    let before_end = repo.find_manager_edge(&employee.id, date(2024, 3, 15)).await?;
    let after_end = repo.find_manager_edge(&employee.id, date(2024, 7, 1)).await?;

    assert_eq!(before_end.map(|e| e.manager_id), Some(manager.id.clone()));
    assert!(after_end.is_none());

    Ok(())
}

/// Tests that the hourly deactivation leaves past reporting lines queryable.
///
/// Expected: the deactivated edge still resolves inside its range
#[tokio::test]
async fn deactivated_edge_still_resolves_in_the_past() -> Result<(), DbErr> {
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
    let employee = factory::user::UserFactory::new(db)
        .organization(&org.id)
        .build()
        .await?;
    factory::hierarchy::EdgeFactory::new(db, &org.id, &manager.id, &employee.id)
        .effective(date(2024, 1, 1), Some(date(2024, 6, 1)))
        .build()
        .await?;

    let repo = HierarchyRepository::new(db);
    assert_eq!(repo.deactivate_ended(date(2025, 1, 1)).await?, 1);

    let edge = repo.find_manager_edge(&employee.id, date(2024, 2, 1)).await?;

    assert_eq!(edge.map(|e| e.manager_id), Some(manager.id.clone()));

    Ok(())
}
