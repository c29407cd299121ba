use super::*;

/// Tests adding a member.
///
/// Expected: Ok and the user is a member but not an admin
#[tokio::test]
async fn adds_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    let user = factory::create_user(db).await?;
    let group = factory::create_group(db, admin.id).await?;

    let repo = GroupRepository::new(db);
    repo.add_member(group.id, user.id).await?;
    repo.add_member(group.id, user.id).await?;

    let detail = repo.get_detail(group.id).await?.unwrap();
    assert_eq!(detail.users.len(), 2);
    assert!(detail.is_member(user.id));
    assert!(!detail.is_admin(user.id));

    Ok(())
}

/// Tests that removing a member also revokes their admin rights.
///
/// Expected: Ok with the user neither member nor admin
#[tokio::test]
async fn remove_member_revokes_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    let co_admin = factory::create_user(db).await?;
    let group = factory::group::GroupFactory::new(db)
        .admin(admin.id)
        .admin(co_admin.id)
        .build()
        .await?;

    let repo = GroupRepository::new(db);
    assert!(repo.remove_member(group.id, co_admin.id).await?);

    assert!(!repo.is_member(group.id, co_admin.id).await?);
    assert!(!repo.is_admin(group.id, co_admin.id).await?);
    assert!(repo.is_admin(group.id, admin.id).await?);

    Ok(())
}

/// Tests removing the only admin from the group.
///
/// Expected: Ok(false), the transaction rolls back and the user keeps both rows
#[tokio::test]
async fn remove_member_keeps_last_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    let group = factory::create_group(db, admin.id).await?;

    let repo = GroupRepository::new(db);

    assert!(!repo.remove_member(group.id, admin.id).await?);
    assert!(repo.is_member(group.id, admin.id).await?);
    assert!(repo.is_admin(group.id, admin.id).await?);

    Ok(())
}
