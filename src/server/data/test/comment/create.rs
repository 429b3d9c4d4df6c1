use super::*;

/// Tests creating a private reply to another comment.
///
/// Expected: Ok with parent, author and privacy flag stored
#[tokio::test]
async fn creates_private_reply() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_feedback_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_cycle, giver, receiver, feedback) =
        factory::helpers::create_feedback_with_dependencies(db).await?;
    let parent = factory::create_comment(db, &feedback.id, &giver.id).await?;

    let reply = CommentRepository::new(db)
        .create(CreateCommentParams {
            feedback_id: feedback.id.clone(),
            author_id: receiver.id.clone(),
            parent_comment_id: Some(parent.id.clone()),
            content: "Thanks, noted".to_string(),
            is_private: true,
        })
        .await?;

    assert_eq!(reply.feedback_id, feedback.id);
    assert_eq!(reply.author_id, receiver.id);
    assert_eq!(reply.parent_comment_id, Some(parent.id));
    assert!(reply.is_private);

    Ok(())
}
