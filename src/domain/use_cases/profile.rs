use std::sync::Arc;

use crate::{entities::profile::Profile, repositories::profile::ProfileRepository};

use super::degrade;

pub struct ProfileHandler<R>
where
    R: ProfileRepository + ?Sized,
{
    pub profile_repo: Arc<R>,
}

impl<R> ProfileHandler<R>
where
    R: ProfileRepository + ?Sized,
{
    pub fn new(profile_repo: Arc<R>) -> Self {
        ProfileHandler { profile_repo }
    }

    /// `None` when no profile is stored or the read failed.
    pub async fn get(&self) -> Option<Profile> {
        degrade(self.profile_repo.get().await, "profile")
    }
}
