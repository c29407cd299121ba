use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, comment, event, group, poll, post, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Social API", description = "Users, posts, events, groups and polls"),
    tags(
        (name = "auth", description = "Session login and logout"),
        (name = "user", description = "Account registration and lookup"),
        (name = "post", description = "Posts, likes and attached events"),
        (name = "comment", description = "Comments on posts"),
        (name = "event", description = "Events and their members"),
        (name = "group", description = "Groups, admins and messages"),
        (name = "poll", description = "Polls, choices and votes"),
    )
)]
struct ApiDoc;

/// Builds every API route plus the Swagger UI at `/api/doc`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(user::get_users, user::register))
        .routes(routes!(
            user::get_user_by_id,
            user::delete_user,
            user::replace_user,
            user::edit_user
        ))
        .routes(routes!(post::get_posts))
        .routes(routes!(
            post::get_post,
            post::create_post,
            post::update_post,
            post::delete_post
        ))
        .routes(routes!(post::add_like))
        .routes(routes!(post::remove_like))
        .routes(routes!(post::add_event))
        .routes(routes!(post::remove_event))
        .routes(routes!(comment::get_comments))
        .routes(routes!(
            comment::get_comment,
            comment::update_comment,
            comment::delete_comment
        ))
        .routes(routes!(comment::create_comment))
        .routes(routes!(event::get_events, event::create_event))
        .routes(routes!(
            event::get_event,
            event::update_event,
            event::delete_event
        ))
        .routes(routes!(event::add_member))
        .routes(routes!(event::remove_member))
        .routes(routes!(group::get_groups, group::create_group))
        .routes(routes!(group::get_group, group::delete_group))
        .routes(routes!(group::add_user))
        .routes(routes!(group::remove_user))
        .routes(routes!(group::add_admin))
        .routes(routes!(group::remove_admin))
        .routes(routes!(group::post_message))
        .routes(routes!(poll::get_polls))
        .routes(routes!(poll::get_poll, poll::create_poll, poll::delete_poll))
        .routes(routes!(poll::add_choice))
        .routes(routes!(poll::remove_choice))
        .routes(routes!(poll::vote))
        .routes(routes!(poll::unvote))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/doc").url("/api/doc/openapi.json", api))
}
