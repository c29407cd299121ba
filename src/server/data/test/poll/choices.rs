use super::*;

/// Tests adding a choice.
///
/// Expected: Ok and the choice is found within its poll
#[tokio::test]
async fn adds_choice() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, post) = factory::helpers::create_post_with_author(db).await?;
    let poll = factory::create_poll(db, post.id).await?;

    let repo = PollRepository::new(db);
    let choice = repo
        .add_choice(
            poll.id,
            PollChoiceParam {
                title: "Maybe".to_string(),
            },
        )
        .await?;

    assert_eq!(choice.title, "Maybe");
    assert_eq!(repo.find_choice(poll.id, choice.id).await?, Some(choice));

    Ok(())
}

/// Tests that a choice is not found through another poll.
///
/// Expected: Ok(None)
#[tokio::test]
async fn find_choice_is_scoped_to_poll() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_author, _post, _poll, choices) =
        factory::helpers::create_poll_with_choices(db, &["A"]).await?;
    let (_other_author, _other_post, other_poll, _other_choices) =
        factory::helpers::create_poll_with_choices(db, &["B"]).await?;

    let repo = PollRepository::new(db);

    assert!(repo.find_choice(other_poll.id, choices[0].id).await?.is_none());

    Ok(())
}

/// Tests that removing a choice removes its votes.
///
/// Expected: Ok with no vote rows left
#[tokio::test]
async fn remove_choice_cascades_to_votes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_poll_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, _post, poll, choices) =
        factory::helpers::create_poll_with_choices(db, &["A", "B"]).await?;
    factory::poll::create_vote(db, choices[0].id, author.id).await?;

    let repo = PollRepository::new(db);
    repo.remove_choice(choices[0].id).await?;

    assert!(entity::prelude::PollVote::find().all(db).await?.is_empty());
    let detail = repo.get_detail(poll.id).await?.unwrap();
    assert_eq!(detail.choices.len(), 1);
    assert_eq!(detail.choices[0].choice.id, choices[1].id);

    Ok(())
}
