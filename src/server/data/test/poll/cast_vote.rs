use super::*;

/// Tests casting a first vote.
///
/// Expected: Ok with the user counted on the chosen option
#[tokio::test]
async fn records_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _post, poll, choices) =
        factory::helpers::create_poll_with_choices(db, &["Yes", "No"]).await?;
    let voter = factory::create_user(db).await?;

    let repo = PollRepository::new(db);
    repo.cast_vote(poll.id, choices[1].id, voter.id).await?;

    let detail = repo.get_detail(poll.id).await?.unwrap();
    assert_eq!(detail.vote_of(voter.id), Some(choices[1].id));

    Ok(())
}

/// Tests that voting again moves the vote instead of adding one.
///
/// Expected: Ok with exactly one vote row for the user, on the new choice
#[tokio::test]
async fn replaces_previous_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _post, poll, choices) =
        factory::helpers::create_poll_with_choices(db, &["Yes", "No"]).await?;
    let voter = factory::create_user(db).await?;

    let repo = PollRepository::new(db);
    repo.cast_vote(poll.id, choices[0].id, voter.id).await?;
    repo.cast_vote(poll.id, choices[1].id, voter.id).await?;

    let votes = entity::prelude::PollVote::find().all(db).await?;
    assert_eq!(votes.len(), 1);
    assert_eq!(votes[0].poll_choice_id, choices[1].id);

    Ok(())
}

/// Tests that voting twice for the same choice keeps one vote.
///
/// Expected: Ok with a single vote row
#[tokio::test]
async fn same_choice_twice_keeps_one_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _post, poll, choices) =
        factory::helpers::create_poll_with_choices(db, &["Yes"]).await?;
    let voter = factory::create_user(db).await?;

    let repo = PollRepository::new(db);
    repo.cast_vote(poll.id, choices[0].id, voter.id).await?;
    repo.cast_vote(poll.id, choices[0].id, voter.id).await?;

    assert_eq!(entity::prelude::PollVote::find().all(db).await?.len(), 1);

    Ok(())
}

/// Tests that a vote on one poll leaves votes on other polls alone.
///
/// Expected: Ok with the user holding one vote on each poll
#[tokio::test]
async fn keeps_votes_on_other_polls() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_a, _p, first_poll, first_choices) =
        factory::helpers::create_poll_with_choices(db, &["A"]).await?;
    let (_b, _q, second_poll, second_choices) =
        factory::helpers::create_poll_with_choices(db, &["B"]).await?;
    let voter = factory::create_user(db).await?;

    let repo = PollRepository::new(db);
    repo.cast_vote(first_poll.id, first_choices[0].id, voter.id).await?;
    repo.cast_vote(second_poll.id, second_choices[0].id, voter.id)
        .await?;

    assert_eq!(entity::prelude::PollVote::find().all(db).await?.len(), 2);

    Ok(())
}

/// Tests removing a vote.
///
/// Expected: Ok with the user no longer voting on the poll
#[tokio::test]
async fn remove_vote_clears_user_vote() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _post, poll, choices) =
        factory::helpers::create_poll_with_choices(db, &["Yes", "No"]).await?;
    let voter = factory::create_user(db).await?;
    factory::poll::create_vote(db, choices[0].id, author.id).await?;

    let repo = PollRepository::new(db);
    repo.cast_vote(poll.id, choices[0].id, voter.id).await?;
    repo.remove_vote(poll.id, voter.id).await?;

    let detail = repo.get_detail(poll.id).await?.unwrap();
    assert_eq!(detail.vote_of(voter.id), None);
    assert_eq!(detail.vote_of(author.id), Some(choices[0].id));

    Ok(())
}
