use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    constants::{FEATURED_PROJECTS_LIMIT, LATEST_POSTS_LIMIT},
    entities::{
        page::{HomeResponse, SiteMeta},
        post::Post,
        project::Project,
    },
    AppState,
};

/// Profile, featured projects, latest posts and deep dives, fetched together.
#[instrument(skip(state))]
pub async fn home(state: web::Data<AppState>) -> impl Responder {
    let category = state.config.deep_dive_category.as_str();

    let (profile, featured, latest, deep_dives) = futures::join!(
        state.profile_handler.get(),
        state.project_handler.featured(FEATURED_PROJECTS_LIMIT),
        state.blog_handler.recent(LATEST_POSTS_LIMIT),
        state.blog_handler.deep_dives(category),
    );

    HttpResponse::Ok().json(HomeResponse {
        site: SiteMeta::from(&state.config),
        profile,
        featured_projects: featured.iter().map(Project::to_card).collect(),
        latest_posts: latest.iter().map(Post::to_card).collect(),
        deep_dives: deep_dives.iter().map(Post::to_card).collect(),
        deep_dive_category: category.to_string(),
    })
}
