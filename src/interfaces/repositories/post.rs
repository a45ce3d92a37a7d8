use async_trait::async_trait;
use sqlx::{self, PgPool, Postgres, QueryBuilder};

use crate::{
    domain::listing::{collect_tags, PageWindow},
    entities::post::{Post, PostRow, POST_COLUMNS},
    errors::AppError,
    repositories::sqlx_repo::SqlxPostRepo,
};

/// Read access to published posts. Unpublished rows are never returned.
#[async_trait]
pub trait PostRepository: Sync + Send {
    async fn list_published(&self, tag: Option<&str>, window: Option<PageWindow>) -> Result<Vec<Post>, AppError>;
    async fn count_published(&self, tag: Option<&str>) -> Result<u64, AppError>;
    async fn get_published_by_slug(&self, slug: &str) -> Result<Option<Post>, AppError>;
    async fn list_tags(&self) -> Result<Vec<String>, AppError>;
    async fn list_recent(&self, limit: u32) -> Result<Vec<Post>, AppError>;
    async fn list_by_category(&self, category: &str) -> Result<Vec<Post>, AppError>;
    async fn list_slugs(&self) -> Result<Vec<String>, AppError>;
    /// Returns the new count, or `None` when no post has this slug.
    async fn increment_view_count(&self, slug: &str) -> Result<Option<i64>, AppError>;
    async fn check_connection(&self) -> Result<(), AppError>;
}

impl SqlxPostRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxPostRepo { pool }
    }
}

fn published_posts<'a>() -> QueryBuilder<'a, Postgres> {
    QueryBuilder::new(format!("SELECT {POST_COLUMNS} FROM posts WHERE published = TRUE"))
}

#[async_trait]
impl PostRepository for SqlxPostRepo {
    async fn list_published(&self, tag: Option<&str>, window: Option<PageWindow>) -> Result<Vec<Post>, AppError> {
        let mut builder = published_posts();

        if let Some(tag) = tag {
            builder.push(" AND tags @> ").push_bind(vec![tag.to_string()]);
        }

        builder.push(" ORDER BY published_at DESC NULLS LAST, id");

        if let Some(window) = window {
            builder.push(" LIMIT ").push_bind(window.limit);
            builder.push(" OFFSET ").push_bind(window.offset);
        }

        let rows: Vec<PostRow> = builder.build_query_as::<PostRow>().fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn count_published(&self, tag: Option<&str>) -> Result<u64, AppError> {
        // Same predicate as `list_published`
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM posts
            WHERE published = TRUE
              AND ($1::text IS NULL OR tags @> ARRAY[$1::text])
            "#
        )
        .bind(tag)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.max(0) as u64)
    }

    async fn get_published_by_slug(&self, slug: &str) -> Result<Option<Post>, AppError> {
        let mut builder = published_posts();
        builder.push(" AND slug = ").push_bind(slug.to_string());

        let row: Option<PostRow> = builder.build_query_as::<PostRow>().fetch_optional(&self.pool).await?;

        Ok(row.map(Post::from))
    }

    async fn list_tags(&self) -> Result<Vec<String>, AppError> {
        let rows: Vec<Option<Vec<String>>> = sqlx::query_scalar(
            "SELECT tags FROM posts WHERE published = TRUE"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(collect_tags(rows.into_iter().flatten()))
    }

    async fn list_recent(&self, limit: u32) -> Result<Vec<Post>, AppError> {
        let mut builder = published_posts();
        builder.push(" ORDER BY published_at DESC NULLS LAST LIMIT ");
        builder.push_bind(limit as i64);

        let rows: Vec<PostRow> = builder.build_query_as::<PostRow>().fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Post>, AppError> {
        let mut builder = published_posts();
        builder.push(" AND category = ").push_bind(category.to_string());
        builder.push(" ORDER BY created_at DESC");

        let rows: Vec<PostRow> = builder.build_query_as::<PostRow>().fetch_all(&self.pool).await?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn list_slugs(&self) -> Result<Vec<String>, AppError> {
        let slugs: Vec<String> = sqlx::query_scalar(
            "SELECT slug FROM posts WHERE published = TRUE ORDER BY published_at DESC NULLS LAST"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(slugs)
    }

    async fn increment_view_count(&self, slug: &str) -> Result<Option<i64>, AppError> {
        let count: Option<i32> = sqlx::query_scalar("SELECT increment_view_count($1)")
            .bind(slug)
            .fetch_one(&self.pool)
            .await?;

        Ok(count.map(i64::from))
    }

    async fn check_connection(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::InternalError(format!("Database connection error: {}", e)))?;

        Ok(())
    }
}
