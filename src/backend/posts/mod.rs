//! Community feed posts

pub mod db;
pub mod handlers;

pub use db::Post;
pub use handlers::{create_post, delete_post, list_posts, CreatePostRequest};
