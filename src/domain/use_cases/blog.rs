use std::sync::Arc;

use crate::{
    domain::listing::{search_posts, ListQuery, Page, PageWindow},
    entities::post::{Post, PostDetailResponse, PostListResponse, ViewCountResponse},
    errors::AppError,
    repositories::post::PostRepository,
    settings::GiscusSettings,
};

use super::degrade;

pub struct BlogHandler<R>
where
    R: PostRepository + ?Sized,
{
    pub post_repo: Arc<R>,
}

impl<R> BlogHandler<R>
where
    R: PostRepository + ?Sized,
{
    pub fn new(post_repo: Arc<R>) -> Self {
        BlogHandler { post_repo }
    }

    /// Resolves the blog index query. The tag list is fetched alongside the
    /// page data; a non-empty search switches to the in-memory search source.
    pub async fn list_posts(&self, query: &ListQuery, per_page: u32) -> PostListResponse {
        let (tags, page) = futures::join!(self.tags(), self.page(query, per_page));
        PostListResponse::new(page, tags, query)
    }

    async fn page(&self, query: &ListQuery, per_page: u32) -> Page<Post> {
        match query.search_text() {
            Some(text) => {
                let posts = degrade(self.post_repo.list_published(query.tag(), None).await, "posts");
                Page::from_items(search_posts(posts, text), query.search_page, per_page)
            }
            None => {
                let window = PageWindow::new(query.page, per_page);
                let (posts, total) = futures::join!(
                    self.post_repo.list_published(query.tag(), Some(window)),
                    self.post_repo.count_published(query.tag()),
                );
                Page::from_window(
                    degrade(posts, "posts"),
                    query.page,
                    per_page,
                    degrade(total, "post count"),
                )
            }
        }
    }

    pub async fn tags(&self) -> Vec<String> {
        degrade(self.post_repo.list_tags().await, "tags")
    }

    pub async fn get_post(&self, slug: &str) -> Option<Post> {
        degrade(self.post_repo.get_published_by_slug(slug).await, "post by slug")
    }

    /// A post without a body has nothing to render and is treated as missing.
    pub async fn post_detail(
        &self,
        slug: &str,
        giscus: Option<GiscusSettings>,
    ) -> Result<PostDetailResponse, AppError> {
        match self.get_post(slug).await {
            Some(post) if post.has_content() => Ok(post.to_detail_response(giscus)),
            _ => Err(AppError::NotFound(format!("Post '{}' not found", slug))),
        }
    }

    pub async fn recent(&self, limit: u32) -> Vec<Post> {
        degrade(self.post_repo.list_recent(limit).await, "recent posts")
    }

    pub async fn deep_dives(&self, category: &str) -> Vec<Post> {
        degrade(self.post_repo.list_by_category(category).await, "deep dive posts")
    }

    pub async fn published(&self) -> Vec<Post> {
        degrade(self.post_repo.list_published(None, None).await, "published posts")
    }

    pub async fn slugs(&self) -> Vec<String> {
        degrade(self.post_repo.list_slugs().await, "post slugs")
    }

    /// Best-effort increment. Unknown slugs are a 404; store failures leave
    /// the count unknown rather than failing the request.
    pub async fn record_view(&self, slug: &str) -> Result<ViewCountResponse, AppError> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Err(AppError::InvalidInput("Slug must not be empty".to_string()));
        }

        match self.post_repo.increment_view_count(slug).await {
            Ok(Some(count)) => Ok(ViewCountResponse { slug: slug.to_string(), view_count: Some(count) }),
            Ok(None) => Err(AppError::NotFound(format!("Post '{}' not found", slug))),
            Err(e) => {
                tracing::error!("Error incrementing view count for {}: {}", slug, e);
                Ok(ViewCountResponse { slug: slug.to_string(), view_count: None })
            }
        }
    }

    pub async fn check_connection(&self) -> Result<(), AppError> {
        self.post_repo.check_connection().await
    }
}
