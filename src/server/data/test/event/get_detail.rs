use super::*;

/// Tests that an event detail reports the post it is attached to.
///
/// Expected: Ok(Some) with `post_id` set
#[tokio::test]
async fn reports_attached_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let event = factory::create_event(db, owner.id).await?;
    let post = factory::post::PostFactory::new(db, owner.id)
        .event_id(event.id)
        .build()
        .await?;

    let repo = EventRepository::new(db);
    let detail = repo.get_detail(event.id).await?.unwrap();

    assert_eq!(detail.post_id, Some(post.id));

    Ok(())
}

/// Tests listing events in id order with their own members.
///
/// Expected: Ok with two events, only the first having a member
#[tokio::test]
async fn lists_events_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let first = factory::create_event(db, owner.id).await?;
    let second = factory::create_event(db, owner.id).await?;
    factory::event::add_event_member(db, first.id, owner.id).await?;

    let repo = EventRepository::new(db);
    let details = repo.get_all_details().await?;

    assert_eq!(details.len(), 2);
    assert_eq!(details[0].event.id, first.id);
    assert_eq!(details[0].members.len(), 1);
    assert_eq!(details[1].event.id, second.id);
    assert!(details[1].members.is_empty());

    Ok(())
}
