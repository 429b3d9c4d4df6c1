use super::*;

/// Tests that an admin lists only members of their own organization.
///
/// Expected: the admin and their colleague, but not the outsider
#[tokio::test]
async fn lists_only_own_organization_users() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let org = factory::create_organization(db).await.unwrap();
    let admin = factory::user::UserFactory::new(db)
        .organization(&org.id)
        .roles(&["employee", "admin"])
        .build()
        .await
        .unwrap();
    let colleague = factory::user::UserFactory::new(db)
        .organization(&org.id)
        .build()
        .await
        .unwrap();
    let other_org = factory::create_organization(db).await.unwrap();
    let outsider = factory::user::UserFactory::new(db)
        .organization(&other_org.id)
        .build()
        .await
        .unwrap();
    let app = test_app(db, false);

    let (status, bytes) = send(&app, request(Method::GET, "/api/users", Some(&admin.id), None)).await;

    assert_eq!(status, StatusCode::OK);
    let page = json(&bytes);
    assert_eq!(page["total"], 2);
    let ids: Vec<&str> = page["users"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|u| u["id"].as_str())
        .collect();
    assert!(ids.contains(&admin.id.as_str()));
    assert!(ids.contains(&colleague.id.as_str()));
    assert!(!ids.contains(&outsider.id.as_str()));
}

/// Tests that a super admin lists users of every organization.
///
/// Expected: all three users
#[tokio::test]
async fn super_admin_lists_every_user() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let org = factory::create_organization(db).await.unwrap();
    let super_admin = factory::user::UserFactory::new(db)
        .organization(&org.id)
        .roles(&["employee", "super_admin"])
        .build()
        .await
        .unwrap();
    let other_org = factory::create_organization(db).await.unwrap();
    factory::user::UserFactory::new(db)
        .organization(&other_org.id)
        .build()
        .await
        .unwrap();
    factory::create_user(db).await.unwrap();
    let app = test_app(db, false);

    let (status, bytes) = send(
        &app,
        request(Method::GET, "/api/users", Some(&super_admin.id), None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json(&bytes)["total"], 3);
}

/// Tests that employees cannot list users.
///
/// Expected: 403
#[tokio::test]
async fn rejects_employee() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let (_cycle, employee, _) = factory::helpers::create_cycle_with_participants(db)
        .await
        .unwrap();
    let app = test_app(db, false);

    let (status, _) = send(&app, request(Method::GET, "/api/users", Some(&employee.id), None)).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}
