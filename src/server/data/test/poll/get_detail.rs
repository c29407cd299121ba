use super::*;

/// Tests that a poll detail lists voters under their choice.
///
/// Expected: Ok(Some) with voters grouped per choice
#[tokio::test]
async fn groups_voters_by_choice() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _post, poll, choices) =
        factory::helpers::create_poll_with_choices(db, &["Tea", "Coffee"]).await?;
    let other = factory::create_user(db).await?;
    factory::poll::create_vote(db, choices[1].id, author.id).await?;
    factory::poll::create_vote(db, choices[1].id, other.id).await?;

    let repo = PollRepository::new(db);
    let detail = repo.get_detail(poll.id).await?.unwrap();

    assert_eq!(detail.choices.len(), 2);
    assert!(detail.choices[0].voter_ids.is_empty());
    assert_eq!(detail.choices[1].voter_ids, vec![author.id, other.id]);

    Ok(())
}

/// Tests poll summaries keyed by post.
///
/// Expected: Ok with an entry only for the post that has a poll
#[tokio::test]
async fn summaries_are_keyed_by_post() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, post, poll, _choices) =
        factory::helpers::create_poll_with_choices(db, &["One", "Two"]).await?;
    let bare = factory::create_post(db, author.id).await?;

    let repo = PollRepository::new(db);
    let summaries = repo.get_summaries_by_post_ids(&[post.id, bare.id]).await?;

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[&post.id].poll.id, poll.id);
    assert_eq!(summaries[&post.id].choices.len(), 2);

    Ok(())
}
