use super::*;

/// Tests the member check across member, admin and outsider.
///
/// Expected: Ok for member and admin, AccessDenied for an outsider
#[tokio::test]
async fn member_check() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let outsider = factory::create_user(db).await?;
    let group = factory::group::GroupFactory::new(db)
        .admin(admin.id)
        .member(member.id)
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    let auth_guard = AuthGuard::new(db, session);

    for allowed in [admin.id, member.id] {
        auth_session.set_user_id(allowed).await?;
        assert!(auth_guard
            .require(&[Permission::GroupMember(group.id)])
            .await
            .is_ok());
    }

    auth_session.set_user_id(outsider.id).await?;
    assert!(matches!(
        auth_guard.require(&[Permission::GroupMember(group.id)]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that plain members fail the admin check.
///
/// Expected: Ok for the admin, AccessDenied for the member
#[tokio::test]
async fn admin_check() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let group = factory::group::GroupFactory::new(db)
        .admin(admin.id)
        .member(member.id)
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    let auth_guard = AuthGuard::new(db, session);

    auth_session.set_user_id(admin.id).await?;
    assert!(auth_guard
        .require(&[Permission::GroupAdmin(group.id)])
        .await
        .is_ok());

    auth_session.set_user_id(member.id).await?;
    assert!(matches!(
        auth_guard.require(&[Permission::GroupAdmin(group.id)]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that a missing group is reported as not found.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reports_missing_group() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::GroupAdmin(3)]).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
