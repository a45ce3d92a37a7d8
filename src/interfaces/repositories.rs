pub mod post;
pub mod profile;
pub mod project;
pub mod sqlx_repo;
