use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::utils::markdown::safe_markdown_to_html;

/// Category entry that shows every project.
pub const ALL_CATEGORIES: &str = "All";

pub const NO_PROJECTS: &str = "No projects found in this category.";

// ───── Database Models ───────────────────────────────────────────────

pub const PROJECT_COLUMNS: &str = "id, title, description, long_description, thumbnail_url, images, \
    tech_stack, category, status, featured, \"order\", demo_url, github_url, start_date, end_date, \
    created_at, updated_at";

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProjectRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub images: Option<Vec<String>>,
    pub tech_stack: Option<Vec<String>>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub featured: Option<bool>,
    #[sqlx(rename = "order")]
    pub display_order: Option<i32>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub images: Vec<String>,
    pub tech_stack: Vec<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub featured: bool,
    pub display_order: Option<i32>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ProjectCard {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub thumbnail_url: Option<String>,
    pub tech_stack: Vec<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub featured: bool,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProjectDetailResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub description_html: String,
    pub thumbnail_url: Option<String>,
    pub images: Vec<String>,
    pub tech_stack: Vec<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub demo_url: Option<String>,
    pub github_url: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<ProjectCard>,
    pub categories: Vec<String>,
    pub selected_category: Option<String>,
    pub empty_state: Option<&'static str>,
}

// ───── Conversions ──────────────────────────────────────────────────

impl From<ProjectRow> for Project {
    fn from(row: ProjectRow) -> Self {
        Project {
            id: row.id,
            title: row.title,
            description: row.description.unwrap_or_default(),
            long_description: row.long_description,
            thumbnail_url: row.thumbnail_url,
            images: row.images.unwrap_or_default(),
            tech_stack: row.tech_stack.unwrap_or_default(),
            category: row.category,
            status: row.status,
            featured: row.featured.unwrap_or(false),
            display_order: row.display_order,
            demo_url: row.demo_url,
            github_url: row.github_url,
            start_date: row.start_date,
            end_date: row.end_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl Project {
    /// Display order: `order` ascending with nulls last, then insertion time, then id.
    pub fn display_cmp(&self, other: &Project) -> Ordering {
        let by_order = match (self.display_order, other.display_order) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_order
            .then_with(|| self.created_at.cmp(&other.created_at))
            .then_with(|| self.id.cmp(&other.id))
    }

    pub fn in_category(&self, category: &str) -> bool {
        category == ALL_CATEGORIES || self.category.as_deref() == Some(category)
    }

    pub fn to_card(&self) -> ProjectCard {
        ProjectCard {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            thumbnail_url: self.thumbnail_url.clone(),
            tech_stack: self.tech_stack.clone(),
            category: self.category.clone(),
            status: self.status.clone(),
            featured: self.featured,
            demo_url: self.demo_url.clone(),
            github_url: self.github_url.clone(),
        }
    }
}

impl From<Project> for ProjectDetailResponse {
    fn from(project: Project) -> Self {
        let body = project
            .long_description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(&project.description);

        ProjectDetailResponse {
            id: project.id,
            description_html: safe_markdown_to_html(body),
            title: project.title,
            description: project.description.clone(),
            thumbnail_url: project.thumbnail_url,
            images: project.images,
            tech_stack: project.tech_stack,
            category: project.category,
            status: project.status,
            demo_url: project.demo_url,
            github_url: project.github_url,
            start_date: project.start_date,
            end_date: project.end_date,
        }
    }
}
