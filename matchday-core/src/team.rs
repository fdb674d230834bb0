//! Team - Participant identity

use serde::{Deserialize, Serialize};

/// A tournament participant. Identity is the `id`; the name is freely
/// editable from the rename dialog without disturbing the draw.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub name: String,
}

impl Team {
    /// Create a team with the given id and display name
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Generate the default roster shown when the participant count changes.
///
/// Ids run `1..=count` and names are "Team 1" through "Team {count}";
/// the setup panel replaces names in place as the user renames teams.
pub fn placeholder_roster(count: usize) -> Vec<Team> {
    (1..=count as u32)
        .map(|i| Team::new(i, format!("Team {}", i)))
        .collect()
}
