use actix_cors::Cors;
use actix_web::http::header;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod shared_repos;

pub use domain::{entities, focus_trap, listing, seo, toc, use_cases, view_counter};
pub use interfaces::{handlers, repositories, routes};
pub use infrastructure::{db, utils};

use repositories::{post::PostRepository, profile::ProfileRepository, project::ProjectRepository};
use settings::AppConfig;
use shared_repos::SharedRepositories;
use use_cases::{blog::BlogHandler, portfolio::ProjectHandler, profile::ProfileHandler};

pub struct AppState {
    pub config: AppConfig,
    pub blog_handler: AppBlogHandler,
    pub project_handler: AppProjectHandler,
    pub profile_handler: AppProfileHandler,
}

pub type AppBlogHandler = BlogHandler<dyn PostRepository>;
pub type AppProjectHandler = ProjectHandler<dyn ProjectRepository>;
pub type AppProfileHandler = ProfileHandler<dyn ProfileRepository>;

impl AppState {
    pub fn new(config: AppConfig, pool: sqlx::PgPool) -> Self {
        Self::with_repositories(config, SharedRepositories::new(pool))
    }

    pub fn with_repositories(config: AppConfig, repos: SharedRepositories) -> Self {
        AppState {
            config,
            blog_handler: BlogHandler::new(repos.post_repo),
            project_handler: ProjectHandler::new(repos.project_repo),
            profile_handler: ProfileHandler::new(repos.profile_repo),
        }
    }
}

/// Read-only site: GET for pages, POST for the view counter and contact form.
pub fn cors(config: &AppConfig) -> Cors {
    let origins = config.cors_origins();

    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    if origins.iter().any(|o| o == "*") {
        return cors.allow_any_origin();
    }

    origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
