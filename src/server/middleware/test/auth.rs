use super::*;

/// Tests that a request without a session user is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that a session pointing at a deleted user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id("missing").await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(ref id))) if id == "missing"
    ));

    Ok(())
}

/// Tests that any logged-in user passes an empty permission list.
///
/// Expected: Ok(User) with the stored roles
#[tokio::test]
async fn returns_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(&user.id).await?;

    let guarded = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(guarded.id, user.id);
    assert!(!guarded.is_admin());

    Ok(())
}

/// Tests that employees are denied admin operations.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_admin_permission_to_employee() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    AuthSession::new(session).set_user_id(&user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that admins pass the admin check but not the super admin check.
#[tokio::test]
async fn admin_is_not_super_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .roles(&["employee", "admin"])
        .build()
        .await?;
    AuthSession::new(session).set_user_id(&user.id).await?;

    let guard = AuthGuard::new(db, session);

    assert!(guard.require(&[Permission::Admin]).await.is_ok());
    assert!(matches!(
        guard.require(&[Permission::SuperAdmin]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that super admins satisfy every permission at once.
#[tokio::test]
async fn super_admin_passes_all_permissions() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .roles(&["employee", "super_admin"])
        .build()
        .await?;
    AuthSession::new(session).set_user_id(&user.id).await?;

    let guarded = AuthGuard::new(db, session)
        .require(&[Permission::Admin, Permission::SuperAdmin])
        .await?;

    assert!(guarded.is_super_admin());

    Ok(())
}
