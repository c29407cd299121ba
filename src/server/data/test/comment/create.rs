use super::*;

/// Tests creating a comment on a post.
///
/// Expected: Ok with the comment linked to post and author
#[tokio::test]
async fn creates_comment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;

    let repo = CommentRepository::new(db);
    let comment = repo
        .create(
            post.id,
            author.id,
            CommentContentParam {
                message: "Nice".to_string(),
                image: None,
            },
        )
        .await?;

    assert_eq!(comment.post_id, post.id);
    assert_eq!(comment.author_id, author.id);
    assert_eq!(comment.message, "Nice");

    let detail = repo.get_detail(comment.id).await?.unwrap();
    assert_eq!(detail.author.name, author.name);

    Ok(())
}

/// Tests commenting on a post that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_user(db).await?;

    let repo = CommentRepository::new(db);
    let result = repo
        .create(
            404,
            author.id,
            CommentContentParam {
                message: "Hello?".to_string(),
                image: None,
            },
        )
        .await;

    assert!(result.is_err());

    Ok(())
}
