use super::*;

/// Tests that promoting a non-member also makes them a member.
///
/// Expected: Ok with the user both member and admin
#[tokio::test]
async fn add_admin_adds_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    let outsider = factory::create_user(db).await?;
    let group = factory::create_group(db, admin.id).await?;

    let repo = GroupRepository::new(db);
    repo.add_admin(group.id, outsider.id).await?;

    assert!(repo.is_member(group.id, outsider.id).await?);
    assert!(repo.is_admin(group.id, outsider.id).await?);
    assert_eq!(repo.admin_count(group.id).await?, 2);

    Ok(())
}

/// Tests revoking admin rights.
///
/// Expected: Ok with the user still a member
#[tokio::test]
async fn remove_admin_keeps_membership() -> Result<(), DbErr> {
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
    assert!(repo.remove_admin(group.id, co_admin.id).await?);

    assert!(repo.is_member(group.id, co_admin.id).await?);
    assert!(!repo.is_admin(group.id, co_admin.id).await?);
    assert_eq!(repo.admin_count(group.id).await?, 1);

    Ok(())
}

/// Tests revoking the only admin inside the repository transaction.
///
/// Expected: Ok(false) with the admin row still present
#[tokio::test]
async fn remove_admin_keeps_last_admin() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    let group = factory::create_group(db, admin.id).await?;

    let repo = GroupRepository::new(db);

    assert!(!repo.remove_admin(group.id, admin.id).await?);
    assert!(repo.is_admin(group.id, admin.id).await?);
    assert_eq!(repo.admin_count(group.id).await?, 1);

    Ok(())
}

/// Tests revoking a user who is not an admin.
///
/// Expected: Ok(true) and the existing admin untouched
#[tokio::test]
async fn remove_admin_of_non_admin_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_group_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_user(db).await?;
    let member = factory::create_user(db).await?;
    let group = factory::create_group(db, admin.id).await?;

    let repo = GroupRepository::new(db);
    repo.add_member(group.id, member.id).await?;

    assert!(repo.remove_admin(group.id, member.id).await?);
    assert_eq!(repo.admin_count(group.id).await?, 1);

    Ok(())
}
