use super::*;

/// Tests deleting a user.
///
/// Expected: Ok(true) and the user row is gone
#[tokio::test]
async fn deletes_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let deleted = repo.delete(user.id).await?;

    assert!(deleted);
    assert!(repo.find_by_id(user.id).await?.is_none());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let deleted = repo.delete(42).await?;

    assert!(!deleted);

    Ok(())
}

/// Tests that deleting a user cascades to everything they own or joined.
///
/// Verifies that posts, comments, likes, owned events, memberships, messages and
/// votes of the user are removed, while other users' data survives.
///
/// Expected: Ok with every dependent row removed
#[tokio::test]
async fn cascades_to_owned_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;

    let own_post = factory::create_post(db, user.id).await?;
    let other_post = factory::create_post(db, other.id).await?;
    factory::create_comment(db, other_post.id, user.id).await?;
    factory::post::like_post(db, other_post.id, user.id).await?;

    let event = factory::create_event(db, user.id).await?;
    let other_event = factory::create_event(db, other.id).await?;
    factory::event::add_event_member(db, other_event.id, user.id).await?;

    let group = factory::group::GroupFactory::new(db)
        .admin(other.id)
        .member(user.id)
        .build()
        .await?;
    factory::group::create_message(db, group.id, user.id, "hello").await?;

    let poll = factory::create_poll(db, other_post.id).await?;
    let choice = factory::create_poll_choice(db, poll.id).await?;
    factory::poll::create_vote(db, choice.id, user.id).await?;

    let repo = UserRepository::new(db);
    assert!(repo.delete(user.id).await?);

    assert!(entity::prelude::Post::find_by_id(own_post.id).one(db).await?.is_none());
    assert!(entity::prelude::Post::find_by_id(other_post.id).one(db).await?.is_some());
    assert!(entity::prelude::Event::find_by_id(event.id).one(db).await?.is_none());
    assert!(entity::prelude::Comment::find().all(db).await?.is_empty());
    assert!(entity::prelude::PostLike::find().all(db).await?.is_empty());
    assert!(entity::prelude::EventMember::find().all(db).await?.is_empty());
    assert!(entity::prelude::Message::find().all(db).await?.is_empty());
    assert!(entity::prelude::PollVote::find().all(db).await?.is_empty());

    let memberships = entity::prelude::GroupUser::find().all(db).await?;
    assert_eq!(memberships.len(), 1);
    assert_eq!(memberships[0].user_id, other.id);

    Ok(())
}
