use super::*;

/// Tests that poll ownership follows the author of the poll's post.
///
/// Expected: Ok for the post author, AccessDenied for anyone else
#[tokio::test]
async fn post_author_owns_poll() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (author, _post, poll, _choices) =
        factory::helpers::create_poll_with_choices(db, &["A", "B"]).await?;
    let voter = factory::create_user(db).await?;

    let auth_session = AuthSession::new(session);
    let auth_guard = AuthGuard::new(db, session);

    auth_session.set_user_id(author.id).await?;
    assert!(auth_guard
        .require(&[Permission::PollOwner(poll.id)])
        .await
        .is_ok());

    auth_session.set_user_id(voter.id).await?;
    assert!(matches!(
        auth_guard.require(&[Permission::PollOwner(poll.id)]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that a missing poll is reported as not found.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reports_missing_poll() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::PollOwner(8)]).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
