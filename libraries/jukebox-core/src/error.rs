/// Core error types for Jukebox
use thiserror::Error;

/// Result type alias using `JukeboxError`
pub type Result<T> = std::result::Result<T, JukeboxError>;

/// Core error type for Jukebox
#[derive(Error, Debug)]
pub enum JukeboxError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint violated
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Request referenced rows that do not exist
    #[error("Unknown {entity} ids: {ids:?}")]
    InvalidReference { entity: String, ids: Vec<i64> },

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl JukeboxError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an invalid reference error
    pub fn invalid_reference(entity: impl Into<String>, ids: Vec<i64>) -> Self {
        Self::InvalidReference {
            entity: entity.into(),
            ids,
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for JukeboxError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::Duplicate(db_err.message().to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_reference_message_lists_ids() {
        let err = JukeboxError::invalid_reference("Track", vec![7, 9]);
        assert_eq!(err.to_string(), "Unknown Track ids: [7, 9]");
    }

    #[test]
    fn test_not_found_message() {
        let err = JukeboxError::not_found("Playlist", 42);
        assert_eq!(err.to_string(), "Playlist not found: 42");
        assert!(!err.is_duplicate());
    }
}
