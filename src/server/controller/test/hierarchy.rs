use chrono::NaiveDate;
use serde_json::json;

use super::*;

async fn org_admin(db: &DatabaseConnection, organization_id: &str) -> entity::user::Model {
    factory::user::UserFactory::new(db)
        .organization(organization_id)
        .roles(&["employee", "admin"])
        .build()
        .await
        .unwrap()
}

async fn member(db: &DatabaseConnection, organization_id: &str) -> entity::user::Model {
    factory::user::UserFactory::new(db)
        .organization(organization_id)
        .build()
        .await
        .unwrap()
}

/// Tests that an edge closing a reporting loop is refused and nothing is stored.
///
/// Expected: 400, and the employee keeps their original manager only
#[tokio::test]
async fn rejects_reporting_loop() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let org = factory::create_organization(db).await.unwrap();
    let admin = org_admin(db, &org.id).await;
    let ceo = member(db, &org.id).await;
    let vp = member(db, &org.id).await;
    let lead = member(db, &org.id).await;
    factory::hierarchy::create_edge(db, &org.id, &ceo.id, &vp.id)
        .await
        .unwrap();
    factory::hierarchy::create_edge(db, &org.id, &vp.id, &lead.id)
        .await
        .unwrap();
    let app = test_app(db, false);

    let (status, bytes) = send(
        &app,
        request(
            Method::POST,
            "/api/hierarchy",
            Some(&admin.id),
            Some(json!({ "managerId": lead.id, "employeeId": ceo.id })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json(&bytes)["error"],
        "This relationship would create a reporting cycle"
    );

    let (status, _) = send(
        &app,
        request(
            Method::GET,
            &format!("/api/hierarchy/{}/manager", ceo.id),
            Some(&admin.id),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests that a loop formed with an edge starting after the new edge's effective date is
/// refused.
///
/// Expected: 400 for an open edge that would overlap the scheduled inverse edge
#[tokio::test]
async fn rejects_loop_with_scheduled_edge() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let org = factory::create_organization(db).await.unwrap();
    let admin = org_admin(db, &org.id).await;
    let first = member(db, &org.id).await;
    let second = member(db, &org.id).await;
    factory::hierarchy::EdgeFactory::new(db, &org.id, &second.id, &first.id)
        .effective(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(), None)
        .build()
        .await
        .unwrap();
    let app = test_app(db, false);

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/hierarchy",
            Some(&admin.id),
            Some(json!({
                "managerId": first.id,
                "employeeId": second.id,
                "effectiveDate": "2025-01-01"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        request(
            Method::POST,
            "/api/hierarchy",
            Some(&admin.id),
            Some(json!({
                "managerId": first.id,
                "employeeId": second.id,
                "effectiveDate": "2025-01-01",
                "endDate": "2025-03-01"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

/// Tests that an ended relationship still answers for dates inside its range.
///
/// Expected: 200 with the manager for a past date, 404 after the end date
#[tokio::test]
async fn ended_edge_answers_past_dates() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let org = factory::create_organization(db).await.unwrap();
    let admin = org_admin(db, &org.id).await;
    let manager = member(db, &org.id).await;
    let employee = member(db, &org.id).await;
    let edge = factory::hierarchy::EdgeFactory::new(db, &org.id, &manager.id, &employee.id)
        .effective(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), None)
        .build()
        .await
        .unwrap();
    let app = test_app(db, false);

    let (status, bytes) = send(
        &app,
        request(
            Method::PUT,
            &format!("/api/hierarchy/{}/end", edge.id),
            Some(&admin.id),
            Some(json!({ "endDate": "2024-06-01" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&bytes)["is_active"], false);

    let manager_uri = format!("/api/hierarchy/{}/manager", employee.id);
    let (status, bytes) = send(
        &app,
        request(
            Method::GET,
            &format!("{}?date=2024-03-15", manager_uri),
            Some(&admin.id),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&bytes)["id"], manager.id.as_str());

    let (status, _) = send(
        &app,
        request(
            Method::GET,
            &format!("{}?date=2024-06-01", manager_uri),
            Some(&admin.id),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// Tests that reporting lines of another organization stay hidden except from super admins.
///
/// Expected: 404 and an empty report list for the outsider, 200 for the super admin
#[tokio::test]
async fn hides_foreign_reporting_lines() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let org = factory::create_organization(db).await.unwrap();
    let manager = member(db, &org.id).await;
    let employee = member(db, &org.id).await;
    factory::hierarchy::create_edge(db, &org.id, &manager.id, &employee.id)
        .await
        .unwrap();
    let other_org = factory::create_organization(db).await.unwrap();
    let outsider = member(db, &other_org.id).await;
    let super_admin = factory::user::UserFactory::new(db)
        .organization(&other_org.id)
        .roles(&["employee", "super_admin"])
        .build()
        .await
        .unwrap();
    let app = test_app(db, false);
    let manager_uri = format!("/api/hierarchy/{}/manager", employee.id);
    let reports_uri = format!("/api/hierarchy/{}/reports", manager.id);

    let (status, _) = send(
        &app,
        request(Method::GET, &manager_uri, Some(&outsider.id), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, bytes) = send(
        &app,
        request(Method::GET, &reports_uri, Some(&outsider.id), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&bytes), json!([]));

    let (status, bytes) = send(
        &app,
        request(Method::GET, &manager_uri, Some(&super_admin.id), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&bytes)["id"], manager.id.as_str());

    let (_, bytes) = send(
        &app,
        request(Method::GET, &reports_uri, Some(&employee.id), None),
    )
    .await;
    assert_eq!(json(&bytes)[0]["id"], employee.id.as_str());
}
