use super::*;

/// Tests that liking twice keeps a single like.
///
/// Expected: Ok with exactly one like row
#[tokio::test]
async fn add_like_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, post) = factory::helpers::create_post_with_author(db).await?;
    let fan = factory::create_user(db).await?;

    let repo = PostRepository::new(db);
    repo.add_like(post.id, fan.id).await?;
    repo.add_like(post.id, fan.id).await?;

    let likes = entity::prelude::PostLike::find().all(db).await?;
    assert_eq!(likes.len(), 1);
    assert_eq!(likes[0].user_id, fan.id);

    Ok(())
}

/// Tests removing a like, including one that does not exist.
///
/// Expected: Ok both times and no like rows remain
#[tokio::test]
async fn remove_like_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_post_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post) = factory::helpers::create_post_with_author(db).await?;
    factory::post::like_post(db, post.id, author.id).await?;

    let repo = PostRepository::new(db);
    repo.remove_like(post.id, author.id).await?;
    repo.remove_like(post.id, author.id).await?;

    assert!(entity::prelude::PostLike::find().all(db).await?.is_empty());

    Ok(())
}
