//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user together with a post they authored.
///
/// # Returns
/// - `Ok((author, post))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_post_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::post::Model), DbErr> {
    let author = crate::factory::user::create_user(db).await?;
    let post = crate::factory::post::create_post(db, author.id).await?;

    Ok((author, post))
}

/// Creates a post with a poll and the given choice titles.
///
/// # Returns
/// - `Ok((author, post, poll, choices))` - The created entities, choices in title order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_poll_with_choices(
    db: &DatabaseConnection,
    titles: &[&str],
) -> Result<
    (
        entity::user::Model,
        entity::post::Model,
        entity::poll::Model,
        Vec<entity::poll_choice::Model>,
    ),
    DbErr,
> {
    let (author, post) = create_post_with_author(db).await?;
    let poll = crate::factory::poll::create_poll(db, post.id).await?;

    let mut choices = Vec::with_capacity(titles.len());
    for title in titles {
        choices.push(
            crate::factory::poll::PollChoiceFactory::new(db, poll.id)
                .title(*title)
                .build()
                .await?,
        );
    }

    Ok((author, post, poll, choices))
}
