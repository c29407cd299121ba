use super::*;

/// Tests creating an event.
///
/// Verifies that the caller becomes owner but not a member.
///
/// Expected: Ok with the owner set and no members
#[tokio::test]
async fn creates_event_owned_by_caller() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;

    let repo = EventRepository::new(db);
    let event = repo.create(owner.id, param("Picnic")).await?;

    assert!(event.is_owned_by(owner.id));
    assert_eq!(event.title, "Picnic");

    let detail = repo.get_detail(event.id).await?.unwrap();
    assert_eq!(detail.owner.map(|u| u.id), Some(owner.id));
    assert!(detail.members.is_empty());
    assert!(detail.post_id.is_none());

    Ok(())
}

/// Tests replacing an event's fields.
///
/// Expected: Ok with the new title and the owner kept
#[tokio::test]
async fn update_keeps_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_event_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let event = factory::create_event(db, owner.id).await?;

    let repo = EventRepository::new(db);
    let updated = repo.update(event.id, param("Renamed")).await?;

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.owner_id, Some(owner.id));

    Ok(())
}
