use async_trait::async_trait;
use sqlx::{self, PgPool, QueryBuilder};
use uuid::Uuid;

use crate::{
    entities::project::{Project, ProjectRow, PROJECT_COLUMNS},
    errors::AppError,
    repositories::sqlx_repo::SqlxProjectRepo,
};

const DISPLAY_ORDER: &str = " ORDER BY \"order\" ASC NULLS LAST, created_at ASC, id ASC";

#[async_trait]
pub trait ProjectRepository: Sync + Send {
    async fn list(&self) -> Result<Vec<Project>, AppError>;
    async fn list_featured(&self, limit: u32) -> Result<Vec<Project>, AppError>;
    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Project>, AppError>;
    async fn list_ids(&self) -> Result<Vec<Uuid>, AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list(&self) -> Result<Vec<Project>, AppError> {
        let mut builder = QueryBuilder::new(format!("SELECT {PROJECT_COLUMNS} FROM projects"));
        builder.push(DISPLAY_ORDER);

        let rows: Vec<ProjectRow> = builder.build_query_as::<ProjectRow>().fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn list_featured(&self, limit: u32) -> Result<Vec<Project>, AppError> {
        let mut builder = QueryBuilder::new(
            format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE featured = TRUE")
        );
        builder.push(DISPLAY_ORDER);
        builder.push(" LIMIT ").push_bind(limit as i64);

        let rows: Vec<ProjectRow> = builder.build_query_as::<ProjectRow>().fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn get_by_id(&self, id: &Uuid) -> Result<Option<Project>, AppError> {
        let row: Option<ProjectRow> = sqlx::query_as(
            &format!("SELECT {PROJECT_COLUMNS} FROM projects WHERE id = $1")
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Project::from))
    }

    async fn list_ids(&self) -> Result<Vec<Uuid>, AppError> {
        let ids: Vec<Uuid> = sqlx::query_scalar(&format!("SELECT id FROM projects{DISPLAY_ORDER}"))
            .fetch_all(&self.pool)
            .await?;

        Ok(ids)
    }
}
