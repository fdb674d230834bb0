//! MATCHDAY Draw - Bracket generation and seeding engine
//!
//! This crate turns a roster and a setup-panel configuration into a
//! complete knockout draw:
//! - Group distribution (round-robin assignment into labeled groups)
//! - Seed calculation (promotion into one global seed order)
//! - Bracket building (byes, top-vs-bottom pairing, forward winner links)
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: generate_draw (orchestration)
//! - Level 2: distribute, compute_seeds, build_rounds (phases)
//! - Level 3: pairing, round naming, format resolution (steps)
//! - Level 4: utilities, configuration
//!
//! Every function is pure and deterministic: the setup panel re-runs the
//! whole pipeline on each keystroke and replaces the previous draw
//! wholesale, so nothing here caches or mutates across calls.

mod bracket;
mod config;
mod draw;
mod groups;
mod seeding;

pub use bracket::{build_rounds, BracketMatch, BracketRound, MatchSlot};
pub use config::{
    DrawConfig, FormatOptions, MAX_GROUPS, MAX_PARTICIPANTS, MAX_PROMOTED, MIN_GROUPS,
    MIN_PARTICIPANTS, MIN_PROMOTED,
};
pub use draw::{generate_draw, Draw};
pub use groups::{distribute, GroupAssignments, GroupedTeam};
pub use seeding::{compute_seeds, SeededTeam};
