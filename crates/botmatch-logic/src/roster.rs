//! Room-wide decision fan-out and session roster setup.
//!
//! A room's participant list mixes humans and AI opponents; only the AI
//! entries are simulated here. [`decide_for_room`] computes every AI
//! decision for a round in one synchronous pass — each agent's decision is
//! independent, so the map carries no ordering guarantees. Delivery timing
//! is the [`crate::scheduler`] module's concern.
//!
//! [`build_roster`] is the session-start counterpart: it deals boards,
//! allocates unique display names, and spreads a balanced difficulty mix
//! across the requested number of opponents.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::decision::{decide, ClickDecision, Clue};
use crate::grid::Grid;
use crate::names;
use crate::profiles::{preset_for, profile_mix, DifficultyProfile, DifficultyTier};

/// Who controls a participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticipantKind {
    Human,
    AiAgent,
}

/// One entry of the room controller's participant list.
///
/// Humans carry a grid too (they play on their own board); `difficulty` and
/// `display_name` only matter for AI entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub kind: ParticipantKind,
    pub difficulty: Option<DifficultyTier>,
    pub display_name: Option<String>,
    pub grid: Grid,
}

/// A fully assembled AI opponent, built once per session.
///
/// The profile is shared read-only across every agent of the same tier; the
/// grid and display name belong to this agent alone.
#[derive(Debug, Clone)]
pub struct Agent {
    pub id: String,
    pub display_name: String,
    pub profile: Arc<DifficultyProfile>,
    pub grid: Grid,
}

/// Tier applied when an AI participant arrives without one.
const DEFAULT_TIER: DifficultyTier = DifficultyTier::Steady;

/// Compute one [`ClickDecision`] per AI participant for this round.
///
/// Human entries are skipped entirely. Profiles are materialized once per
/// tier and shared across same-tier agents. Agents are independent: the
/// result is keyed by participant id and callers must not read any ordering
/// into it.
pub fn decide_for_room(
    clue: &Clue,
    participants: &[Participant],
    rng: &mut impl Rng,
) -> HashMap<String, ClickDecision> {
    let mut presets: HashMap<DifficultyTier, Arc<DifficultyProfile>> = HashMap::new();
    let mut decisions = HashMap::new();

    for participant in participants {
        if participant.kind != ParticipantKind::AiAgent {
            continue;
        }
        let tier = participant.difficulty.unwrap_or(DEFAULT_TIER);
        let profile = presets
            .entry(tier)
            .or_insert_with(|| Arc::new(preset_for(tier)))
            .clone();
        let decision = decide(clue, &participant.grid, &profile, rng);
        decisions.insert(participant.id.clone(), decision);
    }

    decisions
}

/// Balanced tier spread for `total_ai` opponents.
///
/// Thin alias over [`profile_mix`] so room setup can ask for "N opponents,
/// reasonably spread across skill levels" without importing the catalog.
pub fn balanced_difficulty_mix(total_ai: usize) -> Vec<DifficultyTier> {
    profile_mix(total_ai)
}

/// Assemble `count` AI opponents for a new session.
///
/// Each agent gets a unique display name, a tier from the balanced mix, a
/// shared per-tier profile, and its own freshly dealt board over `symbols`.
pub fn build_roster(
    count: usize,
    symbols: &[&str],
    rows: usize,
    cols: usize,
    rng: &mut impl Rng,
) -> Vec<Agent> {
    let mix = balanced_difficulty_mix(count);
    let mut presets: HashMap<DifficultyTier, Arc<DifficultyProfile>> = HashMap::new();
    let mut used_names: HashSet<String> = HashSet::new();
    let mut agents = Vec::with_capacity(count);

    for (i, tier) in mix.into_iter().enumerate() {
        let display_name = names::allocate(&used_names, rng);
        used_names.insert(display_name.clone());

        let profile = presets
            .entry(tier)
            .or_insert_with(|| Arc::new(preset_for(tier)))
            .clone();

        agents.push(Agent {
            id: format!("agent-{i}"),
            display_name,
            profile,
            grid: Grid::shuffled(symbols, rows, cols, rng),
        });
    }

    agents
}

/// View a session roster as the participant list a room controller submits.
pub fn roster_as_participants(agents: &[Agent]) -> Vec<Participant> {
    agents
        .iter()
        .map(|agent| Participant {
            id: agent.id.clone(),
            kind: ParticipantKind::AiAgent,
            difficulty: Some(agent.profile.tier),
            display_name: Some(agent.display_name.clone()),
            grid: agent.grid.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SYMBOLS: [&str; 9] = [
        "DOCTOR", "CHEF", "PILOT", "VET", "NURSE", "FARMER", "ARTIST", "CODER", "TEACHER",
    ];

    fn participant(id: &str, kind: ParticipantKind, tier: Option<DifficultyTier>) -> Participant {
        let mut rng = StdRng::seed_from_u64(id.len() as u64);
        Participant {
            id: id.to_string(),
            kind,
            difficulty: tier,
            display_name: None,
            grid: Grid::shuffled(&SYMBOLS, 3, 3, &mut rng),
        }
    }

    #[test]
    fn empty_room_yields_empty_map() {
        let mut rng = StdRng::seed_from_u64(1);
        let decisions = decide_for_room(&Clue::new("DOCTOR"), &[], &mut rng);
        assert!(decisions.is_empty());
    }

    #[test]
    fn single_agent_room() {
        let mut rng = StdRng::seed_from_u64(2);
        let room = vec![participant(
            "a1",
            ParticipantKind::AiAgent,
            Some(DifficultyTier::Expert),
        )];
        let decisions = decide_for_room(&Clue::new("DOCTOR"), &room, &mut rng);
        assert_eq!(decisions.len(), 1);
        assert!(decisions.contains_key("a1"));
    }

    #[test]
    fn humans_are_never_simulated() {
        let mut rng = StdRng::seed_from_u64(3);
        let room = vec![
            participant("human-1", ParticipantKind::Human, None),
            participant("bot-1", ParticipantKind::AiAgent, Some(DifficultyTier::Steady)),
            participant("human-2", ParticipantKind::Human, None),
        ];
        let decisions = decide_for_room(&Clue::new("VET"), &room, &mut rng);
        assert_eq!(decisions.len(), 1);
        assert!(decisions.contains_key("bot-1"));
    }

    #[test]
    fn fifty_agent_room_gets_fifty_decisions() {
        let mut rng = StdRng::seed_from_u64(4);
        let mix = balanced_difficulty_mix(50);
        let room: Vec<Participant> = mix
            .iter()
            .enumerate()
            .map(|(i, &tier)| participant(&format!("bot-{i}"), ParticipantKind::AiAgent, Some(tier)))
            .collect();
        let decisions = decide_for_room(&Clue::new("CHEF"), &room, &mut rng);
        assert_eq!(decisions.len(), 50);
        for decision in decisions.values() {
            assert!((1.0..=15.0).contains(&decision.response_secs));
            assert!((0.0..=1.0).contains(&decision.confidence));
        }
    }

    #[test]
    fn missing_tier_defaults_to_steady() {
        let mut rng = StdRng::seed_from_u64(5);
        let room = vec![participant("bot-1", ParticipantKind::AiAgent, None)];
        let decisions = decide_for_room(&Clue::new("DOCTOR"), &room, &mut rng);
        assert_eq!(decisions.len(), 1);
    }

    #[test]
    fn build_roster_assigns_unique_names_and_boards() {
        let mut rng = StdRng::seed_from_u64(6);
        let agents = build_roster(12, &SYMBOLS, 3, 3, &mut rng);
        assert_eq!(agents.len(), 12);

        let names: HashSet<&str> = agents.iter().map(|a| a.display_name.as_str()).collect();
        assert_eq!(names.len(), 12, "display names must be unique");

        for agent in &agents {
            for symbol in SYMBOLS {
                assert!(agent.grid.find(symbol).is_some());
            }
        }
    }

    #[test]
    fn build_roster_shares_profiles_per_tier() {
        let mut rng = StdRng::seed_from_u64(7);
        let agents = build_roster(8, &SYMBOLS, 3, 3, &mut rng);
        // Cycle of 4 over 8 agents: positions 0 and 4 are both Beginner and
        // must reference the same preset allocation.
        assert!(Arc::ptr_eq(&agents[0].profile, &agents[4].profile));
        assert_eq!(agents[0].profile.tier, DifficultyTier::Beginner);
        assert!(!Arc::ptr_eq(&agents[0].profile, &agents[1].profile));
    }

    #[test]
    fn roster_round_trips_through_participants() {
        let mut rng = StdRng::seed_from_u64(8);
        let agents = build_roster(5, &SYMBOLS, 3, 3, &mut rng);
        let room = roster_as_participants(&agents);
        let decisions = decide_for_room(&Clue::new("PILOT"), &room, &mut rng);
        assert_eq!(decisions.len(), 5);
        for agent in &agents {
            let decision = &decisions[&agent.id];
            let pos = decision.position.expect("dealt boards are never empty");
            assert_eq!(agent.grid.symbol_at(pos), Some(decision.chosen_symbol.as_str()));
        }
    }
}
