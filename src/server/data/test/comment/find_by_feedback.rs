use super::*;

/// Tests that only the requested record's comments are returned.
///
/// Expected: the two comments on the first record
#[tokio::test]
async fn returns_comments_of_one_feedback() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (cycle, giver, receiver, feedback) =
        factory::helpers::create_feedback_with_dependencies(db).await?;
    let other = factory::feedback::FeedbackFactory::new(db, &cycle.id, &receiver.id, &giver.id)
        .build()
        .await?;

    factory::create_comment(db, &feedback.id, &giver.id).await?;
    factory::create_comment(db, &feedback.id, &receiver.id).await?;
    factory::create_comment(db, &other.id, &giver.id).await?;

    let comments = CommentRepository::new(db)
        .find_by_feedback(&feedback.id)
        .await?;

    assert_eq!(comments.len(), 2);
    assert!(comments.iter().all(|c| c.feedback_id == feedback.id));

    Ok(())
}
