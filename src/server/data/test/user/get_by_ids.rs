use super::*;

/// Tests batch loading users by id.
///
/// Verifies that only the requested users are returned and that unknown ids are
/// skipped.
///
/// Expected: Ok with a map holding the two existing users
#[tokio::test]
async fn returns_requested_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;
    let _third = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_by_ids(&[first.id, second.id, 999]).await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[&first.id].email, first.email);
    assert_eq!(users[&second.id].name, second.name);

    Ok(())
}

/// Tests batch loading with no ids.
///
/// Expected: Ok with an empty map
#[tokio::test]
async fn returns_empty_map_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo.get_by_ids(&[]).await?;

    assert!(users.is_empty());

    Ok(())
}
