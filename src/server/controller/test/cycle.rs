use serde_json::json;

use super::*;

async fn put_status(app: &Router, uri: &str, admin_id: &str, status: &str) -> StatusCode {
    let (status, _) = send(
        app,
        request(
            Method::PUT,
            uri,
            Some(admin_id),
            Some(json!({ "status": status })),
        ),
    )
    .await;

    status
}

/// Tests that a cycle's status only moves forward from draft to active to closed.
///
/// Expected: new cycles are drafts; backward and skipped moves are 400
#[tokio::test]
async fn moves_status_forward_only() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let org = factory::create_organization(db).await.unwrap();
    let admin = factory::user::UserFactory::new(db)
        .organization(&org.id)
        .roles(&["employee", "admin"])
        .build()
        .await
        .unwrap();
    let app = test_app(db, false);

    let (status, bytes) = send(
        &app,
        request(
            Method::POST,
            "/api/cycles",
            Some(&admin.id),
            Some(json!({
                "name": "H1 2031",
                "startDate": "2031-01-01",
                "endDate": "2031-06-30"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let cycle = json(&bytes);
    assert_eq!(cycle["status"], "draft");
    let uri = format!("/api/cycles/{}", cycle["id"].as_str().unwrap());

    assert_eq!(put_status(&app, &uri, &admin.id, "closed").await, StatusCode::BAD_REQUEST);
    assert_eq!(put_status(&app, &uri, &admin.id, "active").await, StatusCode::OK);
    assert_eq!(put_status(&app, &uri, &admin.id, "draft").await, StatusCode::BAD_REQUEST);
    assert_eq!(put_status(&app, &uri, &admin.id, "closed").await, StatusCode::OK);
    assert_eq!(put_status(&app, &uri, &admin.id, "active").await, StatusCode::BAD_REQUEST);
}

/// Tests that an admin cannot change another organization's cycle.
///
/// Expected: 404
#[tokio::test]
async fn hides_foreign_cycle() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (cycle, _, _) = factory::helpers::create_cycle_with_participants(db)
        .await
        .unwrap();
    let other_org = factory::create_organization(db).await.unwrap();
    let foreign_admin = factory::user::UserFactory::new(db)
        .organization(&other_org.id)
        .roles(&["employee", "admin"])
        .build()
        .await
        .unwrap();
    let app = test_app(db, false);

    let status = put_status(
        &app,
        &format!("/api/cycles/{}", cycle.id),
        &foreign_admin.id,
        "closed",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
