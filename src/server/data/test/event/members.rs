use super::*;

/// Tests that adding a member twice keeps one membership.
///
/// Expected: Ok with a single member
#[tokio::test]
async fn add_member_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;
    let event = factory::create_event(db, owner.id).await?;

    let repo = EventRepository::new(db);
    repo.add_member(event.id, guest.id).await?;
    repo.add_member(event.id, guest.id).await?;

    let detail = repo.get_detail(event.id).await?.unwrap();
    assert_eq!(detail.members.len(), 1);
    assert_eq!(detail.members[0].id, guest.id);

    Ok(())
}

/// Tests removing members, including a non-member.
///
/// Expected: Ok both times with no members left
#[tokio::test]
async fn remove_member_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let guest = factory::create_user(db).await?;
    let event = factory::create_event(db, owner.id).await?;
    factory::event::add_event_member(db, event.id, guest.id).await?;

    let repo = EventRepository::new(db);
    repo.remove_member(event.id, guest.id).await?;
    repo.remove_member(event.id, guest.id).await?;

    let detail = repo.get_detail(event.id).await?.unwrap();
    assert!(detail.members.is_empty());

    Ok(())
}
