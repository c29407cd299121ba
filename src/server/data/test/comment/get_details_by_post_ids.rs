use super::*;

/// Tests grouping comments by post.
///
/// Expected: Ok with each post's comments under its id and no entry for posts
/// without comments
#[tokio::test]
async fn groups_comments_by_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, first) = factory::helpers::create_post_with_author(db).await?;
    let second = factory::create_post(db, author.id).await?;
    let silent = factory::create_post(db, author.id).await?;
    factory::create_comment(db, first.id, author.id).await?;
    factory::create_comment(db, first.id, author.id).await?;
    factory::create_comment(db, second.id, author.id).await?;

    let repo = CommentRepository::new(db);
    let by_post = repo
        .get_details_by_post_ids(&[first.id, second.id, silent.id])
        .await?;

    assert_eq!(by_post[&first.id].len(), 2);
    assert_eq!(by_post[&second.id].len(), 1);
    assert!(!by_post.contains_key(&silent.id));

    Ok(())
}
