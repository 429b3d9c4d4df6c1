use serde_json::json;

use super::*;

/// Tests that the giver can comment on their own feedback.
///
/// Expected: 201 with the stored comment
#[tokio::test]
async fn creates_comment() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_cycle, giver, _receiver, feedback) =
        factory::helpers::create_feedback_with_dependencies(db).await.unwrap();
    let app = test_app(db, false);

    let (status, bytes) = send(
        &app,
        request(
            Method::POST,
            &format!("/api/feedback/{}/comments", feedback.id),
            Some(&giver.id),
            Some(json!({ "content": "Great quarter", "isPrivate": true })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let comment = json(&bytes);
    assert_eq!(comment["content"], "Great quarter");
    assert_eq!(comment["author_id"], giver.id.as_str());
    assert_eq!(comment["feedback_id"], feedback.id.as_str());
    assert_eq!(comment["is_private"], true);
}

/// Tests that blank comment content is rejected with field details.
///
/// Expected: 400 with a `content` field error
#[tokio::test]
async fn rejects_blank_comment() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_cycle, giver, _receiver, feedback) =
        factory::helpers::create_feedback_with_dependencies(db).await.unwrap();
    let app = test_app(db, false);

    let (status, bytes) = send(
        &app,
        request(
            Method::POST,
            &format!("/api/feedback/{}/comments", feedback.id),
            Some(&giver.id),
            Some(json!({ "content": "   " })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = json(&bytes);
    assert_eq!(error["details"][0]["field"], "content");
}

/// Tests that deleting a comment returns no body.
///
/// Expected: 204 with an empty body
#[tokio::test]
async fn deletes_comment_with_empty_body() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_cycle, giver, _receiver, feedback) =
        factory::helpers::create_feedback_with_dependencies(db).await.unwrap();
    let comment = factory::create_comment(db, &feedback.id, &giver.id)
        .await
        .unwrap();
    let app = test_app(db, false);

    let (status, bytes) = send(
        &app,
        request(
            Method::DELETE,
            &format!("/api/feedback/{}/comments/{}", feedback.id, comment.id),
            Some(&giver.id),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(bytes.is_empty());
}

/// Tests that someone else's comment cannot be edited.
///
/// Expected: 403
#[tokio::test]
async fn rejects_update_by_non_author() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_cycle, giver, receiver, feedback) =
        factory::helpers::create_feedback_with_dependencies(db).await.unwrap();
    let comment = factory::create_comment(db, &feedback.id, &giver.id)
        .await
        .unwrap();
    let app = test_app(db, false);

    let (status, _) = send(
        &app,
        request(
            Method::PUT,
            &format!("/api/feedback/{}/comments/{}", feedback.id, comment.id),
            Some(&receiver.id),
            Some(json!({ "content": "Edited" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

/// Tests that comments on a missing feedback record report not found.
///
/// Expected: 404 with an error body
#[tokio::test]
async fn returns_not_found_for_missing_feedback() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await.unwrap();
    let app = test_app(db, false);

    let (status, bytes) = send(
        &app,
        request(Method::GET, "/api/feedback/missing/comments", Some(&user.id), None),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json(&bytes)["error"], "Feedback not found");
}

/// Tests that anonymous callers are turned away before any lookup.
///
/// Expected: 401
#[tokio::test]
async fn rejects_anonymous_request() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let app = test_app(db, false);

    let (status, _) = send(
        &app,
        request(Method::GET, "/api/feedback/anything/comments", None, None),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

/// Tests that the receiver's manager sees public comments but not private ones.
///
/// Expected: 200 with only the public comment
#[tokio::test]
async fn hides_private_comments_from_manager() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (cycle, giver, receiver, feedback) =
        factory::helpers::create_feedback_with_dependencies(db).await.unwrap();
    let manager = factory::create_user(db).await.unwrap();
    factory::hierarchy::create_edge(db, &cycle.organization_id, &manager.id, &receiver.id)
        .await
        .unwrap();
    factory::comment::CommentFactory::new(db, &feedback.id, &giver.id)
        .content("Visible to the team")
        .build()
        .await
        .unwrap();
    factory::comment::CommentFactory::new(db, &feedback.id, &giver.id)
        .content("Between us")
        .private(true)
        .build()
        .await
        .unwrap();
    let app = test_app(db, false);

    let (status, bytes) = send(
        &app,
        request(
            Method::GET,
            &format!("/api/feedback/{}/comments", feedback.id),
            Some(&manager.id),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let comments = json(&bytes);
    let comments = comments.as_array().unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["content"], "Visible to the team");
}

/// Tests that the author can edit their own comment.
///
/// Expected: 200 with the new content
#[tokio::test]
async fn updates_own_comment() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_cycle, giver, _receiver, feedback) =
        factory::helpers::create_feedback_with_dependencies(db).await.unwrap();
    let comment = factory::create_comment(db, &feedback.id, &giver.id)
        .await
        .unwrap();
    let app = test_app(db, false);

    let (status, bytes) = send(
        &app,
        request(
            Method::PUT,
            &format!("/api/feedback/{}/comments/{}", feedback.id, comment.id),
            Some(&giver.id),
            Some(json!({ "content": "Edited after the 1:1" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let updated = json(&bytes);
    assert_eq!(updated["id"], comment.id.as_str());
    assert_eq!(updated["content"], "Edited after the 1:1");
}
