pub mod create_post;
pub mod delete_post;
pub mod delete_posts;
pub mod get_post;
pub mod get_posts;
pub mod update_post;
