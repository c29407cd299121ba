use super::*;

/// Tests attaching and detaching an event.
///
/// Expected: Ok with the event id set, then cleared
#[tokio::test]
async fn attaches_and_detaches_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let event = factory::create_event(db, author.id).await?;

    let repo = PostRepository::new(db);
    let attached = repo.set_event(post.id, Some(event.id)).await?;
    assert_eq!(attached.event_id, Some(event.id));
    assert_eq!(
        repo.find_by_event_id(event.id).await?.map(|p| p.id),
        Some(post.id)
    );

    let detached = repo.set_event(post.id, None).await?;
    assert!(detached.event_id.is_none());
    assert!(repo.find_by_event_id(event.id).await?.is_none());

    Ok(())
}

/// Tests that one event cannot be attached to two posts.
///
/// Expected: Err from the unique constraint on the second attach
#[tokio::test]
async fn rejects_event_on_second_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, first) = factory::helpers::create_post_with_author(db).await?;
    let second = factory::create_post(db, author.id).await?;
    let event = factory::create_event(db, author.id).await?;

    let repo = PostRepository::new(db);
    repo.set_event(first.id, Some(event.id)).await?;
    let result = repo.set_event(second.id, Some(event.id)).await;

    assert!(result.is_err());

    Ok(())
}
