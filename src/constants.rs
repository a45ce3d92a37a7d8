use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

pub const FEATURED_PROJECTS_LIMIT: u32 = 3;
pub const LATEST_POSTS_LIMIT: u32 = 4;

/// Seconds a health snapshot is served from cache.
pub const HEALTH_CACHE_SECS: i64 = 5;
