use super::*;

/// Tests that new feedback starts as a draft with its content row.
///
/// Expected: Ok with status `draft` and matching content
#[tokio::test]
async fn creates_draft_with_content() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (cycle, giver, receiver) = factory::helpers::create_cycle_with_participants(db).await?;

    let repo = FeedbackRepository::new(db);
    let (feedback, stored_content) = repo
        .create(CreateFeedbackParams {
            cycle_id: cycle.id.clone(),
            from_user_id: giver.id.clone(),
            to_user_id: receiver.id.clone(),
            review_type: ReviewType::Peer,
            content: content("Clear communicator"),
        })
        .await?;

    assert_eq!(feedback.status, FeedbackStatus::Draft.as_str());
    assert_eq!(feedback.review_type, "peer");
    assert_eq!(feedback.cycle_id, cycle.id);
    let stored_content = stored_content.unwrap();
    assert_eq!(stored_content.feedback_id, feedback.id);
    assert_eq!(stored_content.overall_comment, "Clear communicator");

    Ok(())
}

/// Tests duplicate lookup on the cycle, giver, receiver and review type tuple.
///
/// Expected: the same tuple is found, a different review type is not
#[tokio::test]
async fn finds_duplicate_by_tuple() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (cycle, giver, receiver, existing) =
        factory::helpers::create_feedback_with_dependencies(db).await?;

    let repo = FeedbackRepository::new(db);
    let mut params = CreateFeedbackParams {
        cycle_id: cycle.id,
        from_user_id: giver.id,
        to_user_id: receiver.id,
        review_type: ReviewType::Peer,
        content: content("Again"),
    };

    let duplicate = repo.find_duplicate(&params).await?;
    assert_eq!(duplicate.map(|f| f.id), Some(existing.id));

    params.review_type = ReviewType::Manager;
    assert!(repo.find_duplicate(&params).await?.is_none());

    Ok(())
}
