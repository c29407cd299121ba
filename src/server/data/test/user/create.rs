use super::*;

/// Tests creating a user.
///
/// Verifies that the repository inserts the user and returns a domain model carrying
/// the stored email and name.
///
/// Expected: Ok with the created user
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .create(
            "alice@example.com".to_string(),
            "hash".to_string(),
            "Alice".to_string(),
        )
        .await?;

    assert_eq!(user.email, "alice@example.com");
    assert_eq!(user.name, "Alice");

    let stored = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(stored.password, "hash");

    Ok(())
}

/// Tests that email addresses are unique.
///
/// Verifies that inserting a second user with an existing email fails at the
/// database level.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(
        "alice@example.com".to_string(),
        "hash".to_string(),
        "Alice".to_string(),
    )
    .await?;

    let result = repo
        .create(
            "alice@example.com".to_string(),
            "hash".to_string(),
            "Other".to_string(),
        )
        .await;

    assert!(result.is_err());
    assert!(repo.email_exists("alice@example.com").await?);

    Ok(())
}
