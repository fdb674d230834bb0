//! Group distribution - round-robin assignment into labeled groups
//!
//! Level 2 - Phases

use std::collections::BTreeMap;

use matchday_core::Team;
use serde::{Deserialize, Serialize};

use crate::config::MIN_GROUPS;

/// A team placed in a group
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedTeam {
    /// The underlying team
    pub team: Team,
    /// Group label ('A'..)
    pub group: char,
    /// 1-based position within the group, by distribution order
    pub group_rank: u32,
}

/// Groups keyed by label. BTreeMap keeps iteration in label order,
/// which seeding depends on.
pub type GroupAssignments = BTreeMap<char, Vec<GroupedTeam>>;

/// Distribute a roster into `group_count` groups, round-robin.
///
/// Team `i` lands in group `i % group_count` at rank
/// `i / group_count + 1`, so group sizes never differ by more than one.
/// All labels are present even while the roster is shorter than the
/// group count, so the panel can render every configured group.
///
/// Returns an empty map when the group stage is off or the count is
/// below [`MIN_GROUPS`]; callers treat that as "no groups".
pub fn distribute(teams: &[Team], enabled: bool, group_count: u32) -> GroupAssignments {
    if !enabled || group_count < MIN_GROUPS {
        return GroupAssignments::new();
    }

    let labels: Vec<char> = ('A'..='Z').take(group_count as usize).collect();

    let mut groups: GroupAssignments =
        labels.iter().map(|&label| (label, Vec::new())).collect();

    for (i, team) in teams.iter().enumerate() {
        let label = labels[i % labels.len()];
        let group_rank = (i / labels.len()) as u32 + 1;
        groups.entry(label).or_default().push(GroupedTeam {
            team: team.clone(),
            group: label,
            group_rank,
        });
    }

    groups
}
