use uuid::Uuid;

use crate::errors::AppError;

/// Parses an id taken from the URL path. Malformed ids are a client error.
pub fn valid_uuid(id: &str) -> Result<Uuid, AppError> {
    let id = id.trim();
    Uuid::parse_str(id).map_err(|_| AppError::InvalidInput(format!("'{}' is not a valid id", id)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_ids() {
        assert!(matches!(valid_uuid("not-a-uuid"), Err(AppError::InvalidInput(_))));
        assert!(valid_uuid(" 67e55044-10b1-426f-9247-bb680e5fe0c8 ").is_ok());
    }
}
