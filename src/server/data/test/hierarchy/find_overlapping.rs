use super::*;

/// Tests which edges overlap a bounded range.
///
/// Edges that end on or before the range start, start on or after the range end, or were
/// voided without an end date do not overlap.
///
/// Expected: only the edge starting inside the range and the open edge are returned
#[tokio::test]
async fn finds_edges_overlapping_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hierarchy_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let org = factory::create_organization(db).await?;
    let mut users = Vec::new();
    for _ in 0..6 {
        users.push(
            factory::user::UserFactory::new(db)
                .organization(&org.id)
                .build()
                .await?,
        );
    }

    let ended_before = factory::hierarchy::EdgeFactory::new(db, &org.id, &users[0].id, &users[1].id)
        .effective(date(2024, 1, 1), Some(date(2025, 1, 1)))
        .build()
        .await?;
    let starts_inside = factory::hierarchy::EdgeFactory::new(db, &org.id, &users[1].id, &users[2].id)
        .effective(date(2025, 3, 1), None)
        .build()
        .await?;
    let starts_after = factory::hierarchy::EdgeFactory::new(db, &org.id, &users[2].id, &users[3].id)
        .effective(date(2025, 7, 1), None)
        .build()
        .await?;
    let open = factory::hierarchy::EdgeFactory::new(db, &org.id, &users[3].id, &users[4].id)
        .effective(date(2020, 1, 1), None)
        .build()
        .await?;
    let voided = factory::hierarchy::EdgeFactory::new(db, &org.id, &users[4].id, &users[5].id)
        .effective(date(2020, 1, 1), None)
        .active(false)
        .build()
        .await?;

    let ids: Vec<String> = HierarchyRepository::new(db)
        .find_overlapping(&org.id, date(2025, 1, 1), Some(date(2025, 7, 1)))
        .await?
        .into_iter()
        .map(|e| e.id)
        .collect();

    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&starts_inside.id));
    assert!(ids.contains(&open.id));
    assert!(!ids.contains(&ended_before.id));
    assert!(!ids.contains(&starts_after.id));
    assert!(!ids.contains(&voided.id));

    Ok(())
}

/// Tests that an open range reaches edges starting at any later date.
///
/// Expected: the future edge is returned
#[tokio::test]
async fn open_range_reaches_future_edges() -> Result<(), DbErr> {
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
    let future = factory::hierarchy::EdgeFactory::new(db, &org.id, &manager.id, &employee.id)
        .effective(date(2030, 1, 1), None)
        .build()
        .await?;

    let edges = HierarchyRepository::new(db)
        .find_overlapping(&org.id, date(2025, 1, 1), None)
        .await?;

    assert_eq!(edges.len(), 1);
    assert_eq!(edges[0].id, future.id);

    Ok(())
}
