//! Seed calculation - promotion into one global seed order
//!
//! Level 2 - Phases

use matchday_core::Team;
use serde::{Deserialize, Serialize};

use crate::groups::{GroupAssignments, GroupedTeam};

/// A team with its place in the global seed order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeededTeam {
    /// The underlying team
    pub team: Team,
    /// Group label, when the team came through a group stage
    pub group: Option<char>,
    /// Position within that group
    pub group_rank: Option<u32>,
    /// Display tag: "A1", "B2", or "S3" when ungrouped
    pub seed_label: String,
    /// Global 1-based rank used for bracket pairing; contiguous across
    /// the whole returned list
    pub seed_rank: u32,
}

/// Compute the global seed order.
///
/// With groups: iterate groups in label order, take the top
/// `promotion_per_group` of each by `group_rank`, and number seeds
/// group-major (all of A's promotions before B's). Without groups: pass
/// the roster through in order under "S" labels.
///
/// A short or empty result is fine; [`crate::build_rounds`] decides
/// whether a bracket can be built from it.
pub fn compute_seeds(
    teams: &[Team],
    groups: &GroupAssignments,
    promotion_per_group: u32,
    use_groups: bool,
) -> Vec<SeededTeam> {
    if use_groups && !groups.is_empty() {
        let mut seeds = Vec::new();
        let mut seed_rank = 0u32;

        for (&label, members) in groups {
            let mut members: Vec<&GroupedTeam> = members.iter().collect();
            members.sort_by_key(|m| m.group_rank);

            for (position, member) in members.iter().take(promotion_per_group as usize).enumerate()
            {
                seed_rank += 1;
                seeds.push(SeededTeam {
                    team: member.team.clone(),
                    group: Some(label),
                    group_rank: Some(member.group_rank),
                    seed_label: format!("{}{}", label, position + 1),
                    seed_rank,
                });
            }
        }

        seeds
    } else {
        teams
            .iter()
            .enumerate()
            .map(|(i, team)| SeededTeam {
                team: team.clone(),
                group: None,
                group_rank: None,
                seed_label: format!("S{}", i + 1),
                seed_rank: i as u32 + 1,
            })
            .collect()
    }
}
