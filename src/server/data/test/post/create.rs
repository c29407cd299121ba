use super::*;

/// Tests creating a post.
///
/// Verifies that the post is stored for the author with no event and a publication
/// time set by the repository.
///
/// Expected: Ok with the created post
#[tokio::test]
async fn creates_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;

    let before = chrono::Utc::now();
    let repo = PostRepository::new(db);
    let post = repo
        .create(
            author.id,
            PostContentParam {
                content: "First post".to_string(),
                image: Some("cat.png".to_string()),
            },
        )
        .await?;

    assert_eq!(post.author_id, author.id);
    assert_eq!(post.content, "First post");
    assert_eq!(post.image.as_deref(), Some("cat.png"));
    assert!(post.event_id.is_none());
    assert!(post.published_at >= before);

    Ok(())
}

/// Tests creating a post for an author that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_missing_author() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PostRepository::new(db);
    let result = repo.create(999, content("orphan")).await;

    assert!(result.is_err());

    Ok(())
}
