use super::*;

/// Tests creating a group.
///
/// Verifies that the creator is both member and admin of the new group.
///
/// Expected: Ok with one member and one admin
#[tokio::test]
async fn creator_becomes_member_and_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::create_user(db).await?;

    let repo = GroupRepository::new(db);
    let group = repo
        .create(CreateGroupParam {
            creator_id: creator.id,
            name: "Climbers".to_string(),
        })
        .await?;

    assert_eq!(group.name, "Climbers");

    let detail = repo.get_detail(group.id).await?.unwrap();
    assert!(detail.is_member(creator.id));
    assert!(detail.is_admin(creator.id));
    assert_eq!(repo.admin_count(group.id).await?, 1);

    Ok(())
}

/// Tests that a failed creation writes nothing.
///
/// Verifies that a missing creator aborts the transaction before the group is
/// committed.
///
/// Expected: Err and no group rows
#[tokio::test]
async fn rolls_back_for_missing_creator() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GroupRepository::new(db);
    let result = repo
        .create(CreateGroupParam {
            creator_id: 77,
            name: "Ghosts".to_string(),
        })
        .await;

    assert!(result.is_err());
    assert!(repo.get_all_details().await?.is_empty());

    Ok(())
}
