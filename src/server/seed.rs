//! Demo data for local development, enabled with `SEED_DEMO_DATA=true`.

use chrono::{Days, Utc};
use rand::{rngs::StdRng, seq::IndexedRandom, Rng, SeedableRng};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        comment::CommentContentParam,
        event::EventParam,
        group::{CreateGroupParam, MessageParam},
        poll::PollChoiceParam,
        post::PostContentParam,
        user::{RegisterUserParam, User},
    },
    service::{
        comment::CommentService, event::EventService, group::GroupService, poll::PollService,
        post::PostService, user::UserService,
    },
};

const DEMO_USERS: usize = 10;
const DEMO_POSTS: usize = 20;
const DEMO_PASSWORD: &str = "password";

/// Fills an empty database with users, posts, a poll, an event and a group.
///
/// Does nothing when any user already exists.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), AppError> {
    if UserRepository::new(db).count().await? > 0 {
        tracing::info!("Database not empty, skipping demo data");
        return Ok(());
    }

    let mut rng = StdRng::from_os_rng();

    let mut users = Vec::with_capacity(DEMO_USERS);
    for i in 0..DEMO_USERS {
        let user = UserService::new(db)
            .register(RegisterUserParam {
                email: format!("user{}@example.com", i),
                password: DEMO_PASSWORD.to_string(),
                name: format!("User {}", i),
            })
            .await?;
        users.push(user);
    }

    let posts = seed_posts(db, &users, &mut rng).await?;

    // Poll on the first post, voted on by a random subset of users.
    let poll_post = &posts[0];
    let polls = PollService::new(db);
    let mut poll = polls.create(poll_post.0).await?;
    for title in ["Yes", "No", "Maybe"] {
        poll = polls
            .add_choice(
                poll.poll.id,
                PollChoiceParam {
                    title: title.to_string(),
                },
            )
            .await?;
    }
    let choice_ids: Vec<i32> = poll.choices.iter().map(|c| c.choice.id).collect();
    for user in &users {
        if rng.random_bool(0.6) {
            if let Some(&choice_id) = choice_ids.choose(&mut rng) {
                polls.vote(poll.poll.id, choice_id, user.id).await?;
            }
        }
    }

    // Event owned by the second post's author and attached to that post.
    let (event_post_id, event_owner_id) = posts[1];
    let today = Utc::now().date_naive();
    let event = EventService::new(db)
        .create(
            event_owner_id,
            EventParam {
                title: "Demo meetup".to_string(),
                description: "Drinks and introductions.".to_string(),
                start_date: today + Days::new(7),
                end_date: today + Days::new(8),
            },
        )
        .await?;
    for user in users.choose_multiple(&mut rng, 4) {
        EventService::new(db)
            .add_member(event.event.id, user.id)
            .await?;
    }
    PostService::new(db)
        .attach_event(event_post_id, event.event.id, event_owner_id)
        .await?;

    let groups = GroupService::new(db);
    let group = groups
        .create(CreateGroupParam {
            creator_id: users[0].id,
            name: "Demo group".to_string(),
        })
        .await?;
    for user in &users[1..4] {
        groups.add_user(group.group.id, user.id).await?;
    }
    groups
        .post_message(
            group.group.id,
            users[0].id,
            MessageParam {
                content: "Welcome to the group!".to_string(),
            },
        )
        .await?;

    tracing::info!(
        users = users.len(),
        posts = posts.len(),
        "Seeded demo data, every account uses the password \"{}\"",
        DEMO_PASSWORD
    );

    Ok(())
}

/// Creates posts by random authors with random likes and comments.
///
/// Returns `(post_id, author_id)` pairs in creation order.
async fn seed_posts(
    db: &DatabaseConnection,
    users: &[User],
    rng: &mut StdRng,
) -> Result<Vec<(i32, i32)>, AppError> {
    let posts = PostService::new(db);
    let comments = CommentService::new(db);
    let mut created = Vec::with_capacity(DEMO_POSTS);

    for i in 0..DEMO_POSTS {
        let Some(author) = users.choose(rng) else {
            break;
        };

        let post = posts
            .create(
                author.id,
                PostContentParam {
                    content: format!("Demo post number {}", i),
                    image: None,
                },
            )
            .await?;
        let post_id = post.post.id;

        let like_count = rng.random_range(0..=5);
        for liker in users.choose_multiple(rng, like_count) {
            posts.add_like(post_id, liker.id).await?;
        }

        for j in 0..rng.random_range(0..=3) {
            if let Some(commenter) = users.choose(rng) {
                comments
                    .create(
                        post_id,
                        commenter.id,
                        CommentContentParam {
                            message: format!("Comment {} on post {}", j, i),
                            image: None,
                        },
                    )
                    .await?;
            }
        }

        created.push((post_id, author.id));
    }

    Ok(created)
}
