use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::models::Profile;

/// Errors that can occur while loading a roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read roster {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid roster JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate profile id in roster: {0}")]
    DuplicateId(String),
}

/// Profiles held by the caller, in display order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    pub users: Vec<Profile>,
}

/// Parse a roster from JSON, either `{"users": [...]}` or a bare array
pub fn parse_roster(json: &str) -> Result<Roster, RosterError> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RosterShape {
        Wrapped(Roster),
        Bare(Vec<Profile>),
    }

    let roster = match serde_json::from_str::<RosterShape>(json)? {
        RosterShape::Wrapped(roster) => roster,
        RosterShape::Bare(users) => Roster { users },
    };

    let mut seen = std::collections::HashSet::new();
    if let Some(duplicate) = roster.users.iter().find(|p| !seen.insert(p.id.as_str())) {
        return Err(RosterError::DuplicateId(duplicate.id.clone()));
    }

    tracing::debug!("Parsed roster with {} profiles", roster.users.len());

    Ok(roster)
}

/// Load a roster from a JSON file
pub fn load_roster<P: AsRef<Path>>(path: P) -> Result<Roster, RosterError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_roster(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_wrapped_roster() {
        let roster = parse_roster(r#"{"users": [{"id": "1"}, {"id": "2", "interests": ["coffee"]}]}"#)
            .unwrap();
        assert_eq!(roster.users.len(), 2);
        assert_eq!(roster.users[1].top_interests, vec!["coffee"]);
    }

    #[test]
    fn test_parse_bare_array() {
        let roster = parse_roster(r#"[{"id": "1"}]"#).unwrap();
        assert_eq!(roster.users.len(), 1);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = parse_roster(r#"[{"id": "1"}, {"id": "1"}]"#).unwrap_err();
        assert!(matches!(err, RosterError::DuplicateId(id) if id == "1"));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(parse_roster("{"), Err(RosterError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = load_roster("does/not/exist.json").unwrap_err();
        assert!(matches!(err, RosterError::Io { .. }));
    }
}
