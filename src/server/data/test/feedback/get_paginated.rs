use super::*;

/// Tests restricting a listing to feedback a user gave or received.
///
/// Expected: only the two records involving the user, with the full total
#[tokio::test]
async fn filters_by_involved_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (cycle, alice, bob) = factory::helpers::create_cycle_with_participants(db).await?;
    let carol = factory::user::UserFactory::new(db)
        .organization(&cycle.organization_id)
        .build()
        .await?;

    factory::create_feedback(db, &cycle.id, &alice.id, &bob.id).await?;
    factory::create_feedback(db, &cycle.id, &bob.id, &alice.id).await?;
    factory::create_feedback(db, &cycle.id, &bob.id, &carol.id).await?;

    let filter = FeedbackFilter {
        involving_user_id: Some(alice.id.clone()),
        ..Default::default()
    };
    let (rows, total) = FeedbackRepository::new(db)
        .get_paginated(&filter, 1, 20)
        .await?;

    assert_eq!(total, 2);
    assert_eq!(rows.len(), 2);
    assert!(rows
        .iter()
        .all(|(f, _)| f.from_user_id == alice.id || f.to_user_id == alice.id));

    Ok(())
}

/// Tests that pages are sized by `limit` while `total` counts every match.
///
/// Expected: 2 rows on page 1, 1 row on page 2, total 3
#[tokio::test]
async fn pages_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (cycle, giver, receiver) = factory::helpers::create_cycle_with_participants(db).await?;
    for review_type in ["peer", "manager", "upward"] {
        factory::feedback::FeedbackFactory::new(db, &cycle.id, &giver.id, &receiver.id)
            .review_type(review_type)
            .build()
            .await?;
    }

    let repo = FeedbackRepository::new(db);
    let filter = FeedbackFilter::default();

    let (first, total) = repo.get_paginated(&filter, 1, 2).await?;
    let (second, _) = repo.get_paginated(&filter, 2, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 1);

    Ok(())
}

/// Tests excluding a status, as the received and given review lists do.
///
/// Expected: drafts are left out
#[tokio::test]
async fn excludes_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (cycle, giver, receiver) = factory::helpers::create_cycle_with_participants(db).await?;
    factory::feedback::FeedbackFactory::new(db, &cycle.id, &giver.id, &receiver.id)
        .status("draft")
        .build()
        .await?;
    let submitted =
        factory::feedback::FeedbackFactory::new(db, &cycle.id, &giver.id, &receiver.id)
            .review_type("manager")
            .status("submitted")
            .build()
            .await?;

    let filter = FeedbackFilter {
        to_user_id: Some(receiver.id.clone()),
        status_not: Some(FeedbackStatus::Draft),
        ..Default::default()
    };
    let rows = FeedbackRepository::new(db).find_all(&filter).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.id, submitted.id);

    Ok(())
}

/// Tests asking for a page far past the end, where the row offset would overflow.
///
/// Expected: an empty page with the full total instead of a panic
#[tokio::test]
async fn overflowing_page_is_empty() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (cycle, giver, receiver) = factory::helpers::create_cycle_with_participants(db).await?;
    factory::create_feedback(db, &cycle.id, &giver.id, &receiver.id).await?;

    let (rows, total) = FeedbackRepository::new(db)
        .get_paginated(&FeedbackFilter::default(), i64::MAX as u64, 100)
        .await?;

    assert_eq!(total, 1);
    assert!(rows.is_empty());

    Ok(())
}
