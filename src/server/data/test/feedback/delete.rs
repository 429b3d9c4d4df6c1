use super::*;

/// Tests that deleting feedback removes its content and comments too.
///
/// Expected: Ok(true) and no rows left behind
#[tokio::test]
async fn deletes_feedback_and_children() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_cycle, giver, _receiver, feedback) =
        factory::helpers::create_feedback_with_dependencies(db).await?;
    factory::create_comment(db, &feedback.id, &giver.id).await?;

    let deleted = FeedbackRepository::new(db).delete(&feedback.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Feedback::find().all(db).await?.is_empty());
    assert!(entity::prelude::FeedbackContent::find()
        .all(db)
        .await?
        .is_empty());
    assert!(entity::prelude::Comment::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests deleting an unknown ID.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_feedback() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = FeedbackRepository::new(db).delete("missing").await?;

    assert!(!deleted);

    Ok(())
}
