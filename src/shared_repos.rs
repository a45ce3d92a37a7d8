use std::sync::Arc;

use crate::repositories::{
    post::PostRepository,
    profile::ProfileRepository,
    project::ProjectRepository,
    sqlx_repo::{SqlxPostRepo, SqlxProfileRepo, SqlxProjectRepo},
};

/// The content store repositories, type-erased so tests can swap in their own.
#[derive(Clone)]
pub struct SharedRepositories {
    pub post_repo: Arc<dyn PostRepository>,
    pub project_repo: Arc<dyn ProjectRepository>,
    pub profile_repo: Arc<dyn ProfileRepository>,
}

impl SharedRepositories {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SharedRepositories {
            post_repo: Arc::new(SqlxPostRepo::new(pool.clone())),
            project_repo: Arc::new(SqlxProjectRepo::new(pool.clone())),
            profile_repo: Arc::new(SqlxProfileRepo::new(pool)),
        }
    }
}
