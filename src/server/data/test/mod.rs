mod comment;
mod event;
mod group;
mod poll;
mod post;
mod user;
