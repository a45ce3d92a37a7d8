use serde::Serialize;

use crate::{
    entities::{
        post::PostCard,
        profile::{ContactLinks, Profile},
        project::ProjectCard,
    },
    settings::AppConfig,
};

/// Site-wide values every page payload carries.
#[derive(Debug, Serialize)]
pub struct SiteMeta {
    pub name: String,
    pub url: String,
    pub analytics_id: Option<String>,
}

impl From<&AppConfig> for SiteMeta {
    fn from(config: &AppConfig) -> Self {
        SiteMeta {
            name: config.name.clone(),
            url: config.site_url.clone(),
            analytics_id: config.analytics_id.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub site: SiteMeta,
    pub profile: Option<Profile>,
    pub featured_projects: Vec<ProjectCard>,
    pub latest_posts: Vec<PostCard>,
    pub deep_dives: Vec<PostCard>,
    pub deep_dive_category: String,
}

#[derive(Debug, Serialize)]
pub struct AboutResponse {
    pub site: SiteMeta,
    pub skills: Vec<String>,
    pub profile: Option<Profile>,
}

#[derive(Debug, Serialize)]
pub struct ContactPageResponse {
    pub site: SiteMeta,
    pub email: Option<String>,
    pub links: Option<ContactLinks>,
}
