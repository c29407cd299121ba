use super::*;

/// Tests creating a poll on a post.
///
/// Expected: Ok and the poll is found by its post
#[tokio::test]
async fn creates_poll_for_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, post) = factory::helpers::create_post_with_author(db).await?;

    let repo = PollRepository::new(db);
    let poll = repo.create(post.id).await?;

    assert_eq!(poll.post_id, post.id);
    assert_eq!(repo.find_by_post_id(post.id).await?, Some(poll));

    Ok(())
}

/// Tests that a post holds at most one poll.
///
/// Expected: Err from the unique constraint on the second poll
#[tokio::test]
async fn rejects_second_poll_on_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, post) = factory::helpers::create_post_with_author(db).await?;
    factory::create_poll(db, post.id).await?;

    let repo = PollRepository::new(db);
    let result = repo.create(post.id).await;

    assert!(result.is_err());

    Ok(())
}
