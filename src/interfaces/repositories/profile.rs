use async_trait::async_trait;
use sqlx::{self, PgPool};

use crate::{
    entities::profile::{Profile, ProfileRow, PROFILE_COLUMNS},
    errors::AppError,
    repositories::sqlx_repo::SqlxProfileRepo,
};

#[async_trait]
pub trait ProfileRepository: Sync + Send {
    /// The first profile row, if any.
    async fn get(&self) -> Result<Option<Profile>, AppError>;
}

impl SqlxProfileRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProfileRepo { pool }
    }
}

#[async_trait]
impl ProfileRepository for SqlxProfileRepo {
    async fn get(&self) -> Result<Option<Profile>, AppError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            &format!("SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY created_at ASC LIMIT 1")
        )
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Profile::from))
    }
}
