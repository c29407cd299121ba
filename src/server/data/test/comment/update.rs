use super::*;

/// Tests replacing a comment's message.
///
/// Expected: Ok with the new message and the original publication time
#[tokio::test]
async fn replaces_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    let comment = factory::create_comment(db, post.id, author.id).await?;

    let repo = CommentRepository::new(db);
    let updated = repo
        .update(
            comment.id,
            CommentContentParam {
                message: "Edited".to_string(),
                image: Some("pic.jpg".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.message, "Edited");
    assert_eq!(updated.image.as_deref(), Some("pic.jpg"));
    assert_eq!(updated.published_at, comment.published_at);

    Ok(())
}

/// Tests updating a comment that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CommentRepository::new(db);
    let result = repo
        .update(
            3,
            CommentContentParam {
                message: "Edited".to_string(),
                image: None,
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
