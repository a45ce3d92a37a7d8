//! Once-per-mount view counting with optimistic display.
//!
//! The guard is a heuristic, not deduplication: remounts and concurrent tabs
//! may each count a view.

use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncrementState {
    Idle,
    Pending,
    /// Recorded; carries the count now displayed.
    Committed(i64),
    /// The call failed; the guard is re-armed and the last known count stays.
    RolledBack,
}

#[derive(Debug, Clone)]
pub struct ViewCounter {
    slug: String,
    count: i64,
    state: IncrementState,
}

impl ViewCounter {
    pub fn mount(slug: impl Into<String>, initial_count: i64) -> Self {
        ViewCounter { slug: slug.into(), count: initial_count, state: IncrementState::Idle }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn state(&self) -> IncrementState {
        self.state
    }

    /// Claims the single increment for this mount. Returns `None` while a call
    /// is in flight or after one has committed.
    pub fn begin(&mut self) -> Option<&str> {
        match self.state {
            IncrementState::Idle | IncrementState::RolledBack => {
                self.state = IncrementState::Pending;
                Some(&self.slug)
            }
            IncrementState::Pending | IncrementState::Committed(_) => None,
        }
    }

    /// `new_count` is `None` when the store answered without a number; the
    /// displayed count is left as it was.
    pub fn commit(&mut self, new_count: Option<i64>) {
        if let Some(count) = new_count {
            self.count = count;
        }
        self.state = IncrementState::Committed(self.count);
    }

    pub fn rollback(&mut self) {
        self.state = IncrementState::RolledBack;
    }

    /// Runs one guarded increment through `increment`.
    pub async fn record<F, Fut, E>(&mut self, increment: F) -> IncrementState
    where
        F: FnOnce(String) -> Fut,
        Fut: Future<Output = Result<Option<i64>, E>>,
        E: std::fmt::Display,
    {
        let Some(slug) = self.begin().map(str::to_string) else {
            return self.state;
        };

        match increment(slug).await {
            Ok(count) => self.commit(count),
            Err(e) => {
                tracing::warn!("View count increment failed for {}: {}", self.slug, e);
                self.rollback();
            }
        }
        self.state
    }
}
