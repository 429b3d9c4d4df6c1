use serde_json::json;

use super::*;

async fn list(app: &Router, uri: &str, user_id: &str) -> serde_json::Value {
    let (status, bytes) = send(app, request(Method::GET, uri, Some(user_id), None)).await;
    assert_eq!(status, StatusCode::OK);

    json(&bytes)
}

/// Tests the review views before and after the giver completes a draft.
///
/// Expected: the draft is assigned to the giver; once completed it moves to the giver's
/// given list and the receiver's received list
#[tokio::test]
async fn moves_completed_review_between_views() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_cycle, giver, receiver, feedback) =
        factory::helpers::create_feedback_with_dependencies(db).await.unwrap();
    let app = test_app(db, false);

    let assigned = list(&app, "/api/reviews/assigned", &giver.id).await;
    assert_eq!(assigned[0]["id"], feedback.id.as_str());
    assert_eq!(list(&app, "/api/reviews/given", &giver.id).await, json!([]));
    assert_eq!(list(&app, "/api/reviews/received", &receiver.id).await, json!([]));

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            &format!("/api/reviews/{}/complete", feedback.id),
            Some(&giver.id),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(list(&app, "/api/reviews/assigned", &giver.id).await, json!([]));
    let given = list(&app, "/api/reviews/given", &giver.id).await;
    assert_eq!(given[0]["status"], "completed");
    let received = list(&app, "/api/reviews/received", &receiver.id).await;
    assert_eq!(received[0]["id"], feedback.id.as_str());
}

/// Tests the dashboard counts for a giver with one draft and one completed review.
///
/// Expected: assigned 1, given 1, received 0, completed 1, active cycles 1
#[tokio::test]
async fn counts_dashboard() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (cycle, giver, receiver, _draft) =
        factory::helpers::create_feedback_with_dependencies(db).await.unwrap();
    factory::feedback::FeedbackFactory::new(db, &cycle.id, &giver.id, &receiver.id)
        .review_type("manager")
        .status("completed")
        .build()
        .await
        .unwrap();
    let app = test_app(db, false);

    let (status, bytes) = send(
        &app,
        request(Method::GET, "/api/reviews/dashboard", Some(&giver.id), None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let dashboard = json(&bytes);
    assert_eq!(dashboard["assigned"], 1);
    assert_eq!(dashboard["given"], 1);
    assert_eq!(dashboard["received"], 0);
    assert_eq!(dashboard["completed"], 1);
    assert_eq!(dashboard["active_cycles"], 1);
}

/// Tests that only the giver may complete a review.
///
/// Expected: 403 for the receiver, then 200 for the giver and 400 for a second completion
#[tokio::test]
async fn only_giver_completes_review() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_cycle, giver, receiver, feedback) =
        factory::helpers::create_feedback_with_dependencies(db).await.unwrap();
    let app = test_app(db, false);
    let uri = format!("/api/reviews/{}/complete", feedback.id);

    let (status, _) = send(&app, request(Method::POST, &uri, Some(&receiver.id), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(&app, request(Method::POST, &uri, Some(&giver.id), None)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, bytes) = send(&app, request(Method::POST, &uri, Some(&giver.id), None)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&bytes)["error"], "Feedback is already completed");
}
