use std::sync::Arc;

use crate::{
    entities::project::{
        Project, ProjectDetailResponse, ProjectListResponse, ALL_CATEGORIES, NO_PROJECTS,
    },
    errors::AppError,
    repositories::project::ProjectRepository,
    utils::valid_uuid::valid_uuid,
};

use super::degrade;

pub struct ProjectHandler<R>
where
    R: ProjectRepository + ?Sized,
{
    pub project_repo: Arc<R>,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository + ?Sized,
{
    pub fn new(project_repo: Arc<R>) -> Self {
        ProjectHandler { project_repo }
    }

    pub async fn list(&self, category: Option<&str>) -> ProjectListResponse {
        let projects = degrade(self.project_repo.list().await, "projects");
        let categories = project_categories(&projects);
        let selected = category.map(str::trim).filter(|c| !c.is_empty() && *c != ALL_CATEGORIES);

        let visible = filter_by_category(projects, selected.unwrap_or(ALL_CATEGORIES));

        ProjectListResponse {
            empty_state: visible.is_empty().then_some(NO_PROJECTS),
            projects: visible.iter().map(Project::to_card).collect(),
            categories,
            selected_category: selected.map(str::to_string),
        }
    }

    pub async fn featured(&self, limit: u32) -> Vec<Project> {
        degrade(self.project_repo.list_featured(limit).await, "featured projects")
    }

    pub async fn detail(&self, id: &str) -> Result<ProjectDetailResponse, AppError> {
        let id = valid_uuid(id)?;

        degrade(self.project_repo.get_by_id(&id).await, "project by id")
            .map(ProjectDetailResponse::from)
            .ok_or_else(|| AppError::NotFound(format!("Project {} not found", id)))
    }

    pub async fn ids(&self) -> Vec<String> {
        degrade(self.project_repo.list_ids().await, "project ids")
            .into_iter()
            .map(|id| id.to_string())
            .collect()
    }
}

/// `All` followed by each distinct category in first-seen order.
pub fn project_categories(projects: &[Project]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for category in projects.iter().filter_map(|p| p.category.as_deref()) {
        if !category.is_empty() && !categories.iter().any(|c| c == category) {
            categories.push(category.to_string());
        }
    }
    categories
}

pub fn filter_by_category(projects: Vec<Project>, category: &str) -> Vec<Project> {
    projects.into_iter().filter(|p| p.in_category(category)).collect()
}
