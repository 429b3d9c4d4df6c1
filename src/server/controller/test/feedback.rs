use serde_json::json;

use super::*;

/// Tests creating a draft peer review inside an active cycle.
///
/// Expected: 201 with status `draft` and the written content
#[tokio::test]
async fn creates_feedback() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (cycle, giver, receiver) = factory::helpers::create_cycle_with_participants(db)
        .await
        .unwrap();
    let app = test_app(db, false);

    let (status, bytes) = send(
        &app,
        request(
            Method::POST,
            "/api/feedback",
            Some(&giver.id),
            Some(json!({
                "cycleId": cycle.id,
                "toUserId": receiver.id,
                "reviewType": "peer",
                "content": { "overallComment": "Reliable and thorough" }
            })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let feedback = json(&bytes);
    assert_eq!(feedback["status"], "draft");
    assert_eq!(feedback["review_type"], "peer");
    assert_eq!(feedback["from_user_id"], giver.id.as_str());
    assert_eq!(feedback["content"]["overall_comment"], "Reliable and thorough");
}

/// Tests that feedback without an overall comment is rejected.
///
/// Expected: 400 naming `content.overallComment`
#[tokio::test]
async fn rejects_missing_overall_comment() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (cycle, giver, receiver) = factory::helpers::create_cycle_with_participants(db)
        .await
        .unwrap();
    let app = test_app(db, false);

    let (status, bytes) = send(
        &app,
        request(
            Method::POST,
            "/api/feedback",
            Some(&giver.id),
            Some(json!({
                "cycleId": cycle.id,
                "toUserId": receiver.id,
                "reviewType": "peer"
            })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = json(&bytes);
    assert_eq!(error["details"][0]["field"], "content.overallComment");
}

/// Tests that a second review of the same type in the same cycle conflicts.
///
/// Expected: 409
#[tokio::test]
async fn rejects_duplicate_feedback() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (cycle, giver, receiver, _feedback) =
        factory::helpers::create_feedback_with_dependencies(db).await.unwrap();
    let app = test_app(db, false);

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/feedback",
            Some(&giver.id),
            Some(json!({
                "cycleId": cycle.id,
                "toUserId": receiver.id,
                "reviewType": "peer",
                "content": { "overallComment": "Again" }
            })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

/// Tests the upper bound on page size.
///
/// Expected: 400 for `limit=101`, 200 for `limit=100`
#[tokio::test]
async fn enforces_page_limit() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let user = factory::create_user(db).await.unwrap();
    let app = test_app(db, false);

    let (status, _) = send(
        &app,
        request(Method::GET, "/api/feedback?limit=101", Some(&user.id), None),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, bytes) = send(
        &app,
        request(Method::GET, "/api/feedback?limit=100", Some(&user.id), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&bytes)["limit"], 100);
}

/// Tests that employees only list feedback they are part of.
///
/// Expected: the outsider sees nothing, the receiver sees the record
#[tokio::test]
async fn lists_only_involved_feedback() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_cycle, _giver, receiver, feedback) =
        factory::helpers::create_feedback_with_dependencies(db).await.unwrap();
    let outsider = factory::create_user(db).await.unwrap();
    let app = test_app(db, false);

    let (_, bytes) = send(
        &app,
        request(Method::GET, "/api/feedback", Some(&outsider.id), None),
    )
    .await;
    assert_eq!(json(&bytes)["total"], 0);

    let (_, bytes) = send(
        &app,
        request(Method::GET, "/api/feedback", Some(&receiver.id), None),
    )
    .await;
    let page = json(&bytes);
    assert_eq!(page["total"], 1);
    assert_eq!(page["feedback"][0]["id"], feedback.id.as_str());
}

/// Tests that the giver completes a review through the review workflow.
///
/// Expected: 200 with status `completed`, then 400 on a second attempt
#[tokio::test]
async fn completes_review_once() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_cycle, giver, _receiver, feedback) =
        factory::helpers::create_feedback_with_dependencies(db).await.unwrap();
    let app = test_app(db, false);
    let uri = format!("/api/reviews/{}/complete", feedback.id);

    let (status, bytes) = send(&app, request(Method::POST, &uri, Some(&giver.id), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&bytes)["status"], "completed");

    let (status, _) = send(&app, request(Method::POST, &uri, Some(&giver.id), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// Tests that an admin of another organization cannot read or delete a record.
///
/// Expected: 404 for both requests, and the record survives
#[tokio::test]
async fn hides_feedback_from_foreign_admin() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_cycle, giver, _receiver, feedback) =
        factory::helpers::create_feedback_with_dependencies(db).await.unwrap();
    let other_org = factory::create_organization(db).await.unwrap();
    let foreign_admin = factory::user::UserFactory::new(db)
        .organization(&other_org.id)
        .roles(&["employee", "admin"])
        .build()
        .await
        .unwrap();
    let app = test_app(db, false);
    let uri = format!("/api/feedback/{}", feedback.id);

    let (status, _) = send(
        &app,
        request(Method::GET, &uri, Some(&foreign_admin.id), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        request(Method::DELETE, &uri, Some(&foreign_admin.id), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, request(Method::GET, &uri, Some(&giver.id), None)).await;
    assert_eq!(status, StatusCode::OK);
}

/// Tests that an admin of the cycle's organization can read the record.
///
/// Expected: 200
#[tokio::test]
async fn shows_feedback_to_own_admin() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (cycle, _giver, _receiver, feedback) =
        factory::helpers::create_feedback_with_dependencies(db).await.unwrap();
    let admin = factory::user::UserFactory::new(db)
        .organization(&cycle.organization_id)
        .roles(&["employee", "admin"])
        .build()
        .await
        .unwrap();
    let app = test_app(db, false);

    let (status, bytes) = send(
        &app,
        request(
            Method::GET,
            &format!("/api/feedback/{}", feedback.id),
            Some(&admin.id),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&bytes)["id"], feedback.id.as_str());
}

/// Tests that admins list only their own organization's feedback while super admins list all.
///
/// Expected: the foreign admin sees 0 records, the super admin sees 1
#[tokio::test]
async fn scopes_feedback_list_to_admin_organization() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::helpers::create_feedback_with_dependencies(db).await.unwrap();
    let other_org = factory::create_organization(db).await.unwrap();
    let foreign_admin = factory::user::UserFactory::new(db)
        .organization(&other_org.id)
        .roles(&["employee", "admin"])
        .build()
        .await
        .unwrap();
    let super_admin = factory::user::UserFactory::new(db)
        .organization(&other_org.id)
        .roles(&["employee", "super_admin"])
        .build()
        .await
        .unwrap();
    let app = test_app(db, false);

    let (_, bytes) = send(
        &app,
        request(Method::GET, "/api/feedback", Some(&foreign_admin.id), None),
    )
    .await;
    assert_eq!(json(&bytes)["total"], 0);

    let (_, bytes) = send(
        &app,
        request(Method::GET, "/api/feedback", Some(&super_admin.id), None),
    )
    .await;
    assert_eq!(json(&bytes)["total"], 1);
}

/// Tests that feedback cannot target a cycle or a receiver from another organization.
///
/// Expected: 400 for a foreign cycle and for a foreign receiver
#[tokio::test]
async fn rejects_cross_organization_feedback() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (cycle, giver, receiver) = factory::helpers::create_cycle_with_participants(db)
        .await
        .unwrap();
    let (foreign_cycle, _, foreign_user) = factory::helpers::create_cycle_with_participants(db)
        .await
        .unwrap();
    let app = test_app(db, false);

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/feedback",
            Some(&giver.id),
            Some(json!({
                "cycleId": foreign_cycle.id,
                "toUserId": receiver.id,
                "reviewType": "peer",
                "content": { "overallComment": "Wrong cycle" }
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/feedback",
            Some(&giver.id),
            Some(json!({
                "cycleId": cycle.id,
                "toUserId": foreign_user.id,
                "reviewType": "peer",
                "content": { "overallComment": "Wrong receiver" }
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
