//! Domain-level error taxonomy for Scorebook.

use scorebook_state::StorageError;

/// Errors produced before any mutation is attempted.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("unknown outcome: {token}")]
    UnknownOutcome { token: String },

    #[error("invalid identifier: {value}")]
    InvalidId { value: String },

    #[error("corrupt game situation: {0}")]
    CorruptSituation(String),

    #[error("innings count must be at least 1")]
    ZeroInnings,

    #[error("unknown sport: {0}")]
    UnknownSport(String),

    #[error("rbi {rbi} out of range (at most 4 per play)")]
    RbiOutOfRange { rbi: u32 },
}

/// Scorebook domain errors.
#[derive(Debug, thiserror::Error)]
pub enum ScorebookError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("storage error: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for ScorebookError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::GameNotFound { game_id } => ScorebookError::NotFound {
                entity: "game",
                id: game_id,
            },
            StorageError::AtBatNotFound { at_bat_id, .. } => ScorebookError::NotFound {
                entity: "at-bat",
                id: at_bat_id,
            },
            StorageError::AppearanceNotFound { appearance_id, .. } => ScorebookError::NotFound {
                entity: "pitching appearance",
                id: appearance_id,
            },
            StorageError::NotLastAtBat { .. } => {
                ScorebookError::Conflict("can only undo the most recent at-bat".to_string())
            }
            StorageError::SequenceConflict { .. } | StorageError::DuplicateGame { .. } => {
                ScorebookError::Conflict(err.to_string())
            }
            other => ScorebookError::Storage(other),
        }
    }
}

impl ScorebookError {
    pub fn is_conflict(&self) -> bool {
        matches!(self, ScorebookError::Conflict(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ScorebookError::NotFound { .. })
    }
}

/// Result type for Scorebook domain operations.
pub type Result<T> = std::result::Result<T, ScorebookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_not_found_maps_to_not_found() {
        let err: ScorebookError = StorageError::GameNotFound {
            game_id: "g-1".to_string(),
        }
        .into();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "game not found: g-1");
    }

    #[test]
    fn test_not_last_maps_to_conflict() {
        let err: ScorebookError = StorageError::NotLastAtBat {
            game_id: "g-1".to_string(),
            at_bat_id: "ab-1".to_string(),
        }
        .into();
        assert!(err.is_conflict());
        assert!(err.to_string().contains("most recent"));
    }

    #[test]
    fn test_io_stays_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err: ScorebookError = StorageError::Io(io).into();
        assert!(matches!(err, ScorebookError::Storage(_)));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_validation_display() {
        let err: ScorebookError = ValidationError::UnknownOutcome {
            token: "balk".to_string(),
        }
        .into();
        assert!(err.to_string().contains("unknown outcome: balk"));
    }
}
