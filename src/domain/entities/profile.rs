use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub const PROFILE_COLUMNS: &str = "id, name, title, bio, email, location, avatar_url, github_url, \
    linkedin_url, skills, available_for_work, created_at, updated_at";

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileRow {
    pub id: Uuid,
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub skills: Option<Vec<String>>,
    pub available_for_work: Option<bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The site owner. Only the first stored row is used.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub skills: Vec<String>,
    pub available_for_work: bool,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            name: row.name.unwrap_or_default(),
            title: row.title,
            bio: row.bio,
            email: row.email.filter(|e| !e.trim().is_empty()),
            location: row.location,
            avatar_url: row.avatar_url,
            github_url: row.github_url,
            linkedin_url: row.linkedin_url,
            skills: row.skills.unwrap_or_default(),
            available_for_work: row.available_for_work.unwrap_or(false),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ContactLinks {
    pub email: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub location: Option<String>,
}

impl Profile {
    pub fn contact_links(&self) -> ContactLinks {
        ContactLinks {
            email: self.email.clone(),
            github_url: self.github_url.clone(),
            linkedin_url: self.linkedin_url.clone(),
            location: self.location.clone(),
        }
    }
}
