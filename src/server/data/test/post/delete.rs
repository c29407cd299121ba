use super::*;

/// Tests that deleting a post removes its comments, likes and poll.
///
/// Expected: Ok with every dependent row removed and the author kept
#[tokio::test]
async fn cascades_to_interactions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post, poll, choices) =
        factory::helpers::create_poll_with_choices(db, &["Yes", "No"]).await?;
    factory::create_comment(db, post.id, author.id).await?;
    factory::post::like_post(db, post.id, author.id).await?;
    factory::poll::create_vote(db, choices[0].id, author.id).await?;

    let repo = PostRepository::new(db);
    repo.delete(post.id).await?;

    assert!(repo.find_by_id(post.id).await?.is_none());
    assert!(entity::prelude::Comment::find().all(db).await?.is_empty());
    assert!(entity::prelude::PostLike::find().all(db).await?.is_empty());
    assert!(entity::prelude::Poll::find_by_id(poll.id).one(db).await?.is_none());
    assert!(entity::prelude::PollChoice::find().all(db).await?.is_empty());
    assert!(entity::prelude::User::find_by_id(author.id).one(db).await?.is_some());

    Ok(())
}

/// Tests that deleting a post keeps its attached event.
///
/// Expected: Ok with the event still present
#[tokio::test]
async fn keeps_attached_event() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;
    let event = factory::create_event(db, author.id).await?;
    let post = factory::post::PostFactory::new(db, author.id)
        .event_id(event.id)
        .build()
        .await?;

    let repo = PostRepository::new(db);
    repo.delete(post.id).await?;

    assert!(entity::prelude::Event::find_by_id(event.id).one(db).await?.is_some());

    Ok(())
}
