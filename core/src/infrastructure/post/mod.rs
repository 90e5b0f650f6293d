pub mod mappers;
pub mod repositories;

pub use repositories::post_repository::PostgresPostRepository;
