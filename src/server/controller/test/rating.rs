use serde_json::json;

use super::*;

async fn post_rating(
    app: &Router,
    feedback_id: &str,
    user_id: &str,
    body: serde_json::Value,
) -> (StatusCode, Vec<u8>) {
    send(
        app,
        request(
            Method::POST,
            &format!("/api/feedback/{}/ratings", feedback_id),
            Some(user_id),
            Some(body),
        ),
    )
    .await
}

/// Tests that the giver and an admin of the organization may rate, but the receiver may not.
///
/// Expected: 201 for the giver and the admin, 403 for the receiver
#[tokio::test]
async fn only_giver_or_admin_rates() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (cycle, giver, receiver, feedback) =
        factory::helpers::create_feedback_with_dependencies(db).await.unwrap();
    let admin = factory::user::UserFactory::new(db)
        .organization(&cycle.organization_id)
        .roles(&["employee", "admin"])
        .build()
        .await
        .unwrap();
    let app = test_app(db, false);
    let body = json!({ "category": "Communication", "score": 4 });

    let (status, bytes) = post_rating(&app, &feedback.id, &giver.id, body.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    let rating = json(&bytes);
    assert_eq!(rating["score"], 4.0);
    assert_eq!(rating["max_score"], 5.0);

    let (status, _) = post_rating(&app, &feedback.id, &admin.id, body.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = post_rating(&app, &feedback.id, &receiver.id, body).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

/// Tests that completed feedback no longer accepts ratings.
///
/// Expected: 400
#[tokio::test]
async fn rejects_rating_on_completed_feedback() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (cycle, giver, receiver) = factory::helpers::create_cycle_with_participants(db)
        .await
        .unwrap();
    let feedback = factory::feedback::FeedbackFactory::new(db, &cycle.id, &giver.id, &receiver.id)
        .status("completed")
        .build()
        .await
        .unwrap();
    let app = test_app(db, false);

    let (status, bytes) = post_rating(
        &app,
        &feedback.id,
        &giver.id,
        json!({ "category": "Delivery", "score": 3 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json(&bytes)["error"], "Completed feedback cannot be modified");
}

/// Tests that an update without a max score is checked against the stored one.
///
/// Expected: 400 for a score above the stored max of 10, 200 for a score within it
#[tokio::test]
async fn checks_updated_score_against_stored_max() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_cycle, giver, _receiver, feedback) =
        factory::helpers::create_feedback_with_dependencies(db).await.unwrap();
    let app = test_app(db, false);

    let (_, bytes) = post_rating(
        &app,
        &feedback.id,
        &giver.id,
        json!({ "category": "Ownership", "score": 8, "maxScore": 10 }),
    )
    .await;
    let rating_uri = format!("/api/ratings/{}", json(&bytes)["id"].as_str().unwrap());

    let (status, _) = send(
        &app,
        request(
            Method::PUT,
            &rating_uri,
            Some(&giver.id),
            Some(json!({ "score": 12 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, bytes) = send(
        &app,
        request(
            Method::PUT,
            &rating_uri,
            Some(&giver.id),
            Some(json!({ "score": 9 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let rating = json(&bytes);
    assert_eq!(rating["score"], 9.0);
    assert_eq!(rating["max_score"], 10.0);
}
