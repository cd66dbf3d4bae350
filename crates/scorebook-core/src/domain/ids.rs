use std::str::FromStr;

use super::error::ValidationError;

/// Parse one of the uuid-backed identifiers from user input.
pub fn parse_id<T>(value: &str) -> Result<T, ValidationError>
where
    T: FromStr<Err = uuid::Error>,
{
    value
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidId {
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorebook_state::{GameId, PlayerId};

    #[test]
    fn test_parse_round_trip() {
        let id = GameId::new();
        let parsed: GameId = parse_id(&format!(" {id} ")).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_malformed_rejected() {
        let err = parse_id::<PlayerId>("not-a-uuid").unwrap_err();
        assert_eq!(err.to_string(), "invalid identifier: not-a-uuid");
    }
}
