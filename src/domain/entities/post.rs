use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    domain::{
        listing::{ListQuery, ListSource, Page, PageMeta, NO_RESULTS},
        toc::TocEntry,
    },
    settings::GiscusSettings,
    utils::markdown::{reading_time_minutes, render_markdown},
};

// ───── Database Models ───────────────────────────────────────────────

/// Column list shared by every post query.
pub const POST_COLUMNS: &str = "id, slug, title, excerpt, content, category, tags, thumbnail_url, \
    featured, published, published_at, created_at, updated_at, view_count, like_count, reading_time";

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PostRow {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub thumbnail_url: Option<String>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub view_count: Option<i32>,
    pub like_count: Option<i32>,
    pub reading_time: Option<i32>,
}

/// A post with nullable store columns resolved to their defaults.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub content: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub thumbnail_url: Option<String>,
    pub featured: bool,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub view_count: i64,
    pub like_count: i64,
    pub reading_time: u32,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PostCard {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub thumbnail_url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub reading_time: u32,
    pub view_count: i64,
}

#[derive(Debug, Serialize)]
pub struct CommentsEmbed {
    pub provider: &'static str,
    pub repo: String,
    pub repo_id: String,
    pub category: String,
    pub category_id: String,
    pub mapping: &'static str,
    pub term: String,
}

#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub thumbnail_url: Option<String>,
    pub content_html: String,
    pub toc: Option<Vec<TocEntry>>,
    pub reading_time: u32,
    pub view_count: i64,
    pub like_count: i64,
    pub published_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    pub comments: Option<CommentsEmbed>,
}

#[derive(Debug, Serialize)]
pub struct PostListResponse {
    pub posts: Vec<PostCard>,
    pub pagination: PageMeta,
    pub source: ListSource,
    pub tags: Vec<String>,
    pub selected_tag: Option<String>,
    pub query: Option<String>,
    pub empty_state: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct ViewCountResponse {
    pub slug: String,
    /// `None` when the increment could not be recorded.
    pub view_count: Option<i64>,
}

// ───── Conversions ──────────────────────────────────────────────────

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        let reading_time = match row.reading_time {
            Some(minutes) if minutes > 0 => minutes as u32,
            _ => reading_time_minutes(row.content.as_deref().unwrap_or_default()),
        };

        Post {
            id: row.id,
            slug: row.slug,
            title: row.title,
            excerpt: row.excerpt.unwrap_or_default(),
            content: row.content,
            category: row.category,
            tags: row.tags.unwrap_or_default(),
            thumbnail_url: row.thumbnail_url,
            featured: row.featured.unwrap_or(false),
            published: row.published.unwrap_or(false),
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
            view_count: row.view_count.unwrap_or(0) as i64,
            like_count: row.like_count.unwrap_or(0) as i64,
            reading_time,
        }
    }
}

impl Post {
    pub fn has_content(&self) -> bool {
        self.content.as_deref().is_some_and(|c| !c.trim().is_empty())
    }

    pub fn to_card(&self) -> PostCard {
        PostCard {
            id: self.id,
            slug: self.slug.clone(),
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
            published_at: self.published_at,
            reading_time: self.reading_time,
            view_count: self.view_count,
        }
    }

    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }

    pub fn to_detail_response(&self, giscus: Option<GiscusSettings>) -> PostDetailResponse {
        let rendered = render_markdown(self.content.as_deref().unwrap_or_default());

        PostDetailResponse {
            id: self.id,
            slug: self.slug.clone(),
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
            content_html: rendered.html,
            toc: rendered.toc.non_empty(),
            reading_time: self.reading_time,
            view_count: self.view_count,
            like_count: self.like_count,
            published_at: self.published_at,
            updated_at: self.updated_at,
            comments: giscus.map(|g| CommentsEmbed {
                provider: "giscus",
                repo: g.repo,
                repo_id: g.repo_id,
                category: g.category,
                category_id: g.category_id,
                mapping: "pathname",
                term: self.path(),
            }),
        }
    }
}

impl PostListResponse {
    pub fn new(page: Page<Post>, tags: Vec<String>, query: &ListQuery) -> Self {
        let empty_state = page.items.is_empty().then_some(NO_RESULTS);

        PostListResponse {
            posts: page.items.iter().map(Post::to_card).collect(),
            pagination: page.meta,
            source: query.source(),
            tags,
            selected_tag: query.tag.clone(),
            query: query.search_text().map(str::to_string),
            empty_state,
        }
    }
}
