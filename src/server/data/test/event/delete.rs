use super::*;

/// Tests that deleting an event deletes the post it is attached to.
///
/// Expected: Ok with event, attached post and memberships removed
#[tokio::test]
async fn deletes_attached_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let event = factory::create_event(db, owner.id).await?;
    factory::event::add_event_member(db, event.id, owner.id).await?;
    let attached = factory::post::PostFactory::new(db, owner.id)
        .event_id(event.id)
        .build()
        .await?;
    let unrelated = factory::create_post(db, owner.id).await?;

    let repo = EventRepository::new(db);
    repo.delete(event.id).await?;

    assert!(repo.find_by_id(event.id).await?.is_none());
    assert!(entity::prelude::Post::find_by_id(attached.id).one(db).await?.is_none());
    assert!(entity::prelude::Post::find_by_id(unrelated.id).one(db).await?.is_some());
    assert!(entity::prelude::EventMember::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests deleting an event with no attached post.
///
/// Expected: Ok with only the event removed
#[tokio::test]
async fn deletes_event_without_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let event = factory::create_event(db, owner.id).await?;
    let post = factory::create_post(db, owner.id).await?;

    let repo = EventRepository::new(db);
    repo.delete(event.id).await?;

    assert!(repo.find_by_id(event.id).await?.is_none());
    assert!(entity::prelude::Post::find_by_id(post.id).one(db).await?.is_some());

    Ok(())
}
