pub mod blog;
pub mod contact;
pub mod portfolio;
pub mod profile;

use std::fmt::Display;

/// Content reads never fail a page: errors are logged and the caller gets an
/// empty value instead.
pub(crate) fn degrade<T, E>(result: Result<T, E>, context: &str) -> T
where
    T: Default,
    E: Display,
{
    result.unwrap_or_else(|e| {
        tracing::error!("Error fetching {}: {}", context, e);
        T::default()
    })
}
