pub mod common;
pub mod health;
pub mod post;
pub mod query;
