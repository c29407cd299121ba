use super::*;

/// Tests that the author passes the post author check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_author() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    AuthSession::new(session).set_user_id(author.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::PostAuthor(post.id)]).await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that another user fails the post author check.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_other_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_author, post) = factory::helpers::create_post_with_author(db).await?;
    let intruder = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(intruder.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::PostAuthor(post.id)]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that the comment author check follows the comment, not the post.
///
/// Expected: Ok for the commenter, AccessDenied for the post author
#[tokio::test]
async fn comment_author_is_checked_per_comment() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (post_author, post) = factory::helpers::create_post_with_author(db).await?;
    let commenter = factory::create_user(db).await?;
    let comment = factory::create_comment(db, post.id, commenter.id).await?;

    let auth_session = AuthSession::new(session);
    let auth_guard = AuthGuard::new(db, session);

    auth_session.set_user_id(commenter.id).await?;
    assert!(auth_guard
        .require(&[Permission::CommentAuthor(comment.id)])
        .await
        .is_ok());

    auth_session.set_user_id(post_author.id).await?;
    assert!(matches!(
        auth_guard
            .require(&[Permission::CommentAuthor(comment.id)])
            .await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that a missing post is reported as not found.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn reports_missing_post() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require(&[Permission::PostAuthor(12)]).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
