//! Example printing a complete cup draw
//!
//! Run with: cargo run -p matchday-draw --example draw_demo

use matchday_core::{placeholder_roster, SeriesFormat};
use matchday_draw::{generate_draw, DrawConfig, FormatOptions, MatchSlot};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = DrawConfig::with_groups(4, 2)
        .with_participants(12)
        .with_formats(
            FormatOptions::default()
                .with_semifinal(SeriesFormat::TwoLeg)
                .with_finals(SeriesFormat::BestOf3),
        )
        .clamped();

    let teams = placeholder_roster(config.participant_count as usize);
    let draw = generate_draw(&teams, &config);

    println!("Draw for {} teams:", teams.len());

    for (label, members) in &draw.groups {
        let names: Vec<&str> = members.iter().map(|m| m.team.name.as_str()).collect();
        println!("  Group {}: {}", label, names.join(", "));
    }

    println!(
        "Seeded: {} ({} matches total, {} walkovers)",
        draw.seeds.len(),
        draw.total_matches(),
        draw.walkover_count()
    );

    for round in &draw.rounds {
        println!("{} [{}]:", round.name, round.matches[0].format);
        for m in &round.matches {
            println!("  {}: {} vs {}", m.id, slot_text(&m.slots[0]), slot_text(&m.slots[1]));
        }
    }
}

fn slot_text(slot: &MatchSlot) -> String {
    match slot {
        MatchSlot::Team {
            name, seed_label, ..
        } => format!("{} ({})", name, seed_label),
        MatchSlot::Winner { match_id } => format!("winner of {}", match_id),
        MatchSlot::Bye => "bye".to_string(),
    }
}
