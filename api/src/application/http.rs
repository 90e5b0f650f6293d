pub mod health;
pub mod post;
pub mod query_extractor;
pub mod server;
