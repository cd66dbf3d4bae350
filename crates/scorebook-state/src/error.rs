//! Error types for scorebook-state

use thiserror::Error;

/// Errors that can occur in the persistence layer
#[derive(Error, Debug)]
pub enum StorageError {
    /// Game not found
    #[error("game not found: {game_id}")]
    GameNotFound { game_id: String },

    /// At-bat not found for the given game
    #[error("at-bat not found: {at_bat_id} (game {game_id})")]
    AtBatNotFound { game_id: String, at_bat_id: String },

    /// Pitching appearance not found for the given game
    #[error("pitching appearance not found: {appearance_id} (game {game_id})")]
    AppearanceNotFound {
        game_id: String,
        appearance_id: String,
    },

    /// A game with this id already exists
    #[error("game already exists: {game_id}")]
    DuplicateGame { game_id: String },

    /// An at-bat write did not continue the game's sequence
    #[error("sequence conflict for game {game_id}: expected {expected}, got {actual}")]
    SequenceConflict {
        game_id: String,
        expected: u32,
        actual: u32,
    },

    /// Delete-last targeted an at-bat that is not the most recent one
    #[error("at-bat {at_bat_id} is not the most recent at-bat of game {game_id}")]
    NotLastAtBat { game_id: String, at_bat_id: String },

    /// Filesystem error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StorageError {
    /// True for the not-found family of errors.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StorageError::GameNotFound { .. }
                | StorageError::AtBatNotFound { .. }
                | StorageError::AppearanceNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_family() {
        let err = StorageError::GameNotFound {
            game_id: "g1".to_string(),
        };
        assert!(err.is_not_found());
        assert!(err.to_string().contains("game not found"));

        let err = StorageError::NotLastAtBat {
            game_id: "g1".to_string(),
            at_bat_id: "ab1".to_string(),
        };
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("most recent"));
    }

    #[test]
    fn test_sequence_conflict_display() {
        let err = StorageError::SequenceConflict {
            game_id: "g1".to_string(),
            expected: 4,
            actual: 6,
        };
        let msg = err.to_string();
        assert!(msg.contains("expected 4"));
        assert!(msg.contains("got 6"));
    }
}
