//! Draw orchestration - roster + configuration in, full draw out
//!
//! Level 1 - Orchestration

use matchday_core::Team;
use serde::{Deserialize, Serialize};

use crate::bracket::{build_rounds, BracketMatch, BracketRound};
use crate::config::DrawConfig;
use crate::groups::{distribute, GroupAssignments};
use crate::seeding::{compute_seeds, SeededTeam};

/// The complete draw handed to the renderer in one payload
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draw {
    /// Group assignments; empty when the group stage is off
    pub groups: GroupAssignments,
    /// Global seed order feeding the bracket
    pub seeds: Vec<SeededTeam>,
    /// Knockout rounds; empty when fewer than two teams are seeded
    pub rounds: Vec<BracketRound>,
}

impl Draw {
    /// Whether a bracket could be built from the current configuration
    pub fn has_bracket(&self) -> bool {
        !self.rounds.is_empty()
    }

    /// Total matches across all rounds
    pub fn total_matches(&self) -> usize {
        self.rounds.iter().map(|r| r.match_count()).sum()
    }

    /// First-round walkovers caused by bye padding
    pub fn walkover_count(&self) -> usize {
        self.rounds
            .first()
            .map(|r| r.matches.iter().filter(|m| m.is_walkover()).count())
            .unwrap_or(0)
    }

    /// The final, when the bracket exists
    pub fn final_match(&self) -> Option<&BracketMatch> {
        self.rounds.last().and_then(|r| r.matches.first())
    }
}

/// Generate the complete draw (Level 1 orchestration).
///
/// Chains group distribution, seed calculation, and bracket building.
/// Pure and deterministic: the setup panel calls this on every change
/// and replaces the previous draw wholesale.
///
/// # Arguments
/// * `teams` - Participating teams, in roster order
/// * `config` - Setup-panel configuration, already clamped
///
/// # Returns
/// The full draw; `rounds` is empty when no bracket can be built yet
pub fn generate_draw(teams: &[Team], config: &DrawConfig) -> Draw {
    let groups = distribute(teams, config.use_group_stage, config.group_count);
    let seeds = compute_seeds(
        teams,
        &groups,
        config.promotion_per_group,
        config.use_group_stage,
    );
    let rounds = build_rounds(&seeds, &config.formats);

    tracing::debug!(
        "draw generated: {} teams, {} groups, {} seeds, {} rounds",
        teams.len(),
        groups.len(),
        seeds.len(),
        rounds.len()
    );

    Draw {
        groups,
        seeds,
        rounds,
    }
}
