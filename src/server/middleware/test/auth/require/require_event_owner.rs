use super::*;

/// Tests the event owner check for owner and non-owner.
///
/// Expected: Ok for the owner, AccessDenied for a member who does not own it
#[tokio::test]
async fn only_owner_passes() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let owner = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let event = factory::create_event(db, owner.id).await?;
    factory::event::add_event_member(db, event.id, member.id).await?;

    let auth_session = AuthSession::new(session);
    let auth_guard = AuthGuard::new(db, session);

    auth_session.set_user_id(owner.id).await?;
    assert!(auth_guard
        .require(&[Permission::EventOwner(event.id)])
        .await
        .is_ok());

    auth_session.set_user_id(member.id).await?;
    assert!(matches!(
        auth_guard.require(&[Permission::EventOwner(event.id)]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that a missing event is reported as not found.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reports_missing_event() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::EventOwner(5)]).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
