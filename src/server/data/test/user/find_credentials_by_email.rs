use super::*;

/// Tests finding credentials for a registered email.
///
/// Expected: Ok(Some) with the user and their stored password hash
#[tokio::test]
async fn returns_user_and_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("bob@example.com")
        .password_hash("stored-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let (found, hash) = repo
        .find_credentials_by_email("bob@example.com")
        .await?
        .unwrap();

    assert_eq!(found.id, user.id);
    assert_eq!(hash, "stored-hash");

    Ok(())
}

/// Tests finding credentials for an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.find_credentials_by_email("nobody@example.com").await?;

    assert!(result.is_none());

    Ok(())
}
