//! Bracket construction - byes, pairing, forward winner links
//!
//! Level 2 - Phases and Level 3 - Steps

use matchday_core::SeriesFormat;
use serde::{Deserialize, Serialize};

use crate::config::FormatOptions;
use crate::seeding::SeededTeam;

/// One side of a bracket match
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MatchSlot {
    /// A concrete seeded team
    #[serde(rename_all = "camelCase")]
    Team {
        team_id: u32,
        name: String,
        seed_label: String,
        seed_rank: u32,
    },
    /// Winner of a match in the immediately preceding round.
    /// `match_id` is a match id, never a team id.
    #[serde(rename_all = "camelCase")]
    Winner { match_id: String },
    /// No opponent; the other slot advances automatically
    Bye,
}

impl MatchSlot {
    fn from_seed(seed: Option<&SeededTeam>) -> Self {
        match seed {
            Some(s) => MatchSlot::Team {
                team_id: s.team.id,
                name: s.team.name.clone(),
                seed_label: s.seed_label.clone(),
                seed_rank: s.seed_rank,
            },
            None => MatchSlot::Bye,
        }
    }

    /// Whether this slot is a bye
    pub fn is_bye(&self) -> bool {
        matches!(self, MatchSlot::Bye)
    }
}

/// A single bracket tie
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketMatch {
    /// Stable id "R{round+1}-M{position+1}"; later rounds reference
    /// these ids from their Winner slots
    pub id: String,
    /// 0-based round this match belongs to
    pub round_index: usize,
    /// The two sides of the tie
    pub slots: [MatchSlot; 2],
    /// Series format for this tie
    pub format: SeriesFormat,
}

impl BracketMatch {
    /// A walkover has exactly one bye slot: the other side advances
    /// without playing
    pub fn is_walkover(&self) -> bool {
        self.slots.iter().filter(|s| s.is_bye()).count() == 1
    }
}

/// One round of the bracket
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketRound {
    /// Stable id "R{round+1}", the prefix of its match ids
    pub id: String,
    /// Display name ("Round of 16", "Semi-final", "Final", ...)
    pub name: String,
    /// Matches in bracket order
    pub matches: Vec<BracketMatch>,
}

impl BracketRound {
    /// Number of matches in this round
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }
}

// ============================================================================
// Level 2 - Phases
// ============================================================================

/// Build the full knockout bracket from the global seed order.
///
/// Fewer than two seeds yields an empty round list; the caller shows
/// "not enough participants" rather than an error. Otherwise the seeds
/// are padded with byes up to the next power of two and paired
/// top-vs-bottom, and every later round links back to the previous
/// round's match ids through Winner slots.
pub fn build_rounds(seeded_teams: &[SeededTeam], formats: &FormatOptions) -> Vec<BracketRound> {
    if seeded_teams.len() < 2 {
        return Vec::new();
    }

    let mut ordered: Vec<&SeededTeam> = seeded_teams.iter().collect();
    ordered.sort_by_key(|s| s.seed_rank);

    let bracket_size = ordered.len().next_power_of_two();
    let round_count = bracket_size.trailing_zeros() as usize;

    // Seed positions padded with byes up to the bracket size
    let mut positions: Vec<Option<&SeededTeam>> = ordered.into_iter().map(Some).collect();
    positions.resize(bracket_size, None);

    let mut rounds: Vec<BracketRound> = Vec::with_capacity(round_count);

    let first = build_first_round(&positions, formats, round_count);
    rounds.push(first);

    for round_index in 1..round_count {
        let previous = &rounds[round_index - 1].matches;
        let round = build_link_round(previous, round_index, formats, round_count, bracket_size);
        rounds.push(round);
    }

    rounds
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Pair round 0 top-vs-bottom: position j against position N-1-j.
///
/// This is the canonical single-elimination draw. It keeps the top
/// seeds apart for as long as the bracket allows (seed 1 and seed 2
/// land in opposite halves and can only meet in the final), unlike
/// naive sequential pairing.
fn build_first_round(
    positions: &[Option<&SeededTeam>],
    formats: &FormatOptions,
    round_count: usize,
) -> BracketRound {
    let bracket_size = positions.len();
    let matches = (0..bracket_size / 2)
        .map(|j| BracketMatch {
            id: match_id(0, j),
            round_index: 0,
            slots: [
                MatchSlot::from_seed(positions[j]),
                MatchSlot::from_seed(positions[bracket_size - 1 - j]),
            ],
            format: resolve_format(0, round_count, formats),
        })
        .collect();

    BracketRound {
        id: round_id(0),
        name: round_name(0, round_count, bracket_size),
        matches,
    }
}

/// Build a later round whose slot k of match m is the winner of source
/// match 2m+k in the previous round.
fn build_link_round(
    previous: &[BracketMatch],
    round_index: usize,
    formats: &FormatOptions,
    round_count: usize,
    bracket_size: usize,
) -> BracketRound {
    let match_count = (previous.len() + 1) / 2;
    let matches = (0..match_count)
        .map(|m| {
            let slots = [0, 1].map(|k| match previous.get(2 * m + k) {
                Some(source) => MatchSlot::Winner {
                    match_id: source.id.clone(),
                },
                // Unreachable once round 0 fills a power-of-two bracket
                None => MatchSlot::Bye,
            });
            BracketMatch {
                id: match_id(round_index, m),
                round_index,
                slots,
                format: resolve_format(round_index, round_count, formats),
            }
        })
        .collect();

    BracketRound {
        id: round_id(round_index),
        name: round_name(round_index, round_count, bracket_size),
        matches,
    }
}

/// Stable match id: round and position, both 1-based for display
fn match_id(round_index: usize, position: usize) -> String {
    format!("R{}-M{}", round_index + 1, position + 1)
}

fn round_id(round_index: usize) -> String {
    format!("R{}", round_index + 1)
}

/// Name a round: the last round is the Final, the round before it the
/// Semi-final (only when the bracket is deeper than two rounds), and
/// earlier rounds are named after their entrant count.
fn round_name(round_index: usize, round_count: usize, bracket_size: usize) -> String {
    if round_index == round_count - 1 {
        return "Final".to_string();
    }
    if round_index == round_count - 2 && round_count > 2 {
        return "Semi-final".to_string();
    }

    let entrants = bracket_size >> round_index;
    match entrants {
        4 | 8 | 16 | 32 => format!("Round of {}", entrants),
        _ => format!("Round {}", round_index + 1),
    }
}

/// Pick the series format for a round: final and semi-final get their
/// own formats, everything else plays the base format
fn resolve_format(round_index: usize, round_count: usize, formats: &FormatOptions) -> SeriesFormat {
    if round_index == round_count - 1 {
        formats.finals
    } else if round_index == round_count - 2 && round_count > 2 {
        formats.semifinal
    } else {
        formats.base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seeding::compute_seeds;
    use crate::groups::GroupAssignments;
    use matchday_core::placeholder_roster;

    fn seeds(count: usize) -> Vec<SeededTeam> {
        let teams = placeholder_roster(count);
        compute_seeds(&teams, &GroupAssignments::new(), 2, false)
    }

    fn slot_seed_rank(slot: &MatchSlot) -> Option<u32> {
        match slot {
            MatchSlot::Team { seed_rank, .. } => Some(*seed_rank),
            _ => None,
        }
    }

    #[test]
    fn test_eight_teams_full_bracket() {
        let rounds = build_rounds(&seeds(8), &FormatOptions::default());

        assert_eq!(rounds.len(), 3);
        assert_eq!(rounds[0].match_count(), 4);
        assert_eq!(rounds[1].match_count(), 2);
        assert_eq!(rounds[2].match_count(), 1);

        // Top-vs-bottom pairing: (1,8) (2,7) (3,6) (4,5)
        let pairs: Vec<(u32, u32)> = rounds[0]
            .matches
            .iter()
            .map(|m| {
                (
                    slot_seed_rank(&m.slots[0]).unwrap(),
                    slot_seed_rank(&m.slots[1]).unwrap(),
                )
            })
            .collect();
        assert_eq!(pairs, vec![(1, 8), (2, 7), (3, 6), (4, 5)]);
    }

    #[test]
    fn test_five_teams_pads_to_eight() {
        let rounds = build_rounds(&seeds(5), &FormatOptions::default());

        assert_eq!(rounds.len(), 3);
        assert_eq!(rounds[0].match_count(), 4);

        // (S1,Bye) (S2,Bye) (S3,Bye) (S4,S5): three walkovers
        let walkovers = rounds[0].matches.iter().filter(|m| m.is_walkover()).count();
        assert_eq!(walkovers, 3);
        assert!(rounds[0].matches[0].slots[1].is_bye());
        assert_eq!(slot_seed_rank(&rounds[0].matches[3].slots[0]), Some(4));
        assert_eq!(slot_seed_rank(&rounds[0].matches[3].slots[1]), Some(5));
    }

    #[test]
    fn test_too_few_teams() {
        assert!(build_rounds(&seeds(0), &FormatOptions::default()).is_empty());
        assert!(build_rounds(&seeds(1), &FormatOptions::default()).is_empty());
    }

    #[test]
    fn test_two_teams_single_final() {
        let rounds = build_rounds(&seeds(2), &FormatOptions::default());
        assert_eq!(rounds.len(), 1);
        assert_eq!(rounds[0].name, "Final");
        assert_eq!(rounds[0].match_count(), 1);
    }

    #[test]
    fn test_four_teams_no_semifinal_name() {
        // Two-round bracket: opener is "Round of 4", not "Semi-final"
        let rounds = build_rounds(&seeds(4), &FormatOptions::default());
        assert_eq!(rounds.len(), 2);
        assert_eq!(rounds[0].name, "Round of 4");
        assert_eq!(rounds[1].name, "Final");
    }

    #[test]
    fn test_round_names_deep_bracket() {
        let rounds = build_rounds(&seeds(16), &FormatOptions::default());
        let names: Vec<&str> = rounds.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Round of 16", "Round of 8", "Semi-final", "Final"]);
    }

    #[test]
    fn test_winner_links_point_to_previous_round() {
        let rounds = build_rounds(&seeds(8), &FormatOptions::default());

        for r in 1..rounds.len() {
            let previous_ids: Vec<&str> =
                rounds[r - 1].matches.iter().map(|m| m.id.as_str()).collect();
            for (m, mat) in rounds[r].matches.iter().enumerate() {
                for (k, slot) in mat.slots.iter().enumerate() {
                    match slot {
                        MatchSlot::Winner { match_id } => {
                            assert_eq!(match_id, previous_ids[2 * m + k]);
                        }
                        other => panic!("expected winner slot, got {:?}", other),
                    }
                }
            }
        }

        // Spot-check the final's sources
        assert_eq!(
            rounds[2].matches[0].slots,
            [
                MatchSlot::Winner { match_id: "R2-M1".to_string() },
                MatchSlot::Winner { match_id: "R2-M2".to_string() },
            ]
        );
    }

    #[test]
    fn test_match_ids() {
        let rounds = build_rounds(&seeds(8), &FormatOptions::default());
        assert_eq!(rounds[0].id, "R1");
        assert_eq!(rounds[0].matches[0].id, "R1-M1");
        assert_eq!(rounds[0].matches[3].id, "R1-M4");
        assert_eq!(rounds[2].matches[0].id, "R3-M1");
    }

    #[test]
    fn test_format_resolution() {
        let formats = FormatOptions::default()
            .with_base(SeriesFormat::Single)
            .with_semifinal(SeriesFormat::BestOf3)
            .with_finals(SeriesFormat::BestOf5);

        let rounds = build_rounds(&seeds(16), &formats);
        assert!(rounds[0].matches.iter().all(|m| m.format == SeriesFormat::Single));
        assert!(rounds[1].matches.iter().all(|m| m.format == SeriesFormat::Single));
        assert!(rounds[2].matches.iter().all(|m| m.format == SeriesFormat::BestOf3));
        assert_eq!(rounds[3].matches[0].format, SeriesFormat::BestOf5);

        // Two-round bracket has no semi-final: opener plays the base format
        let rounds = build_rounds(&seeds(4), &formats);
        assert_eq!(rounds[0].matches[0].format, SeriesFormat::Single);
        assert_eq!(rounds[1].matches[0].format, SeriesFormat::BestOf5);
    }

    #[test]
    fn test_top_seeds_never_meet_in_round_one() {
        // Top-vs-bottom pairing always gives seed 1 the bottom seed and
        // seed 2 the second-to-bottom seed, so the top two seeds open
        // in separate matches for any field of four or more
        for k in 4usize..=32 {
            let rounds = build_rounds(&seeds(k), &FormatOptions::default());
            let first = &rounds[0].matches;
            let pos_of = |rank: u32| {
                first
                    .iter()
                    .position(|m| m.slots.iter().any(|s| slot_seed_rank(s) == Some(rank)))
                    .unwrap()
            };
            assert_eq!(pos_of(1), 0);
            assert_eq!(pos_of(2), 1);
        }
    }

    #[test]
    fn test_round_count_halving_law() {
        for k in 2..=32usize {
            let rounds = build_rounds(&seeds(k), &FormatOptions::default());
            let n = k.next_power_of_two();
            assert_eq!(rounds.len(), n.trailing_zeros() as usize);
            for (r, round) in rounds.iter().enumerate() {
                assert_eq!(round.match_count(), n >> (r + 1));
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let seeded = seeds(8);
        let formats = FormatOptions::default().with_finals(SeriesFormat::TwoLeg);
        let first = build_rounds(&seeded, &formats);
        let second = build_rounds(&seeded, &formats);
        assert_eq!(first, second);
    }

    #[test]
    fn test_input_order_does_not_matter() {
        // Seeds arrive sorted by seed_rank regardless of list order
        let mut shuffled = seeds(8);
        shuffled.reverse();
        assert_eq!(
            build_rounds(&shuffled, &FormatOptions::default()),
            build_rounds(&seeds(8), &FormatOptions::default())
        );
    }

    #[test]
    fn test_slot_serde_shape() {
        let slot = MatchSlot::Winner {
            match_id: "R1-M2".to_string(),
        };
        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!(json["kind"], "winner");
        assert_eq!(json["matchId"], "R1-M2");

        let bye = serde_json::to_value(MatchSlot::Bye).unwrap();
        assert_eq!(bye["kind"], "bye");
    }
}
