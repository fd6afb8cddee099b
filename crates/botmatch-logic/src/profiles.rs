//! Difficulty tiers and named behavior presets.
//!
//! A [`DifficultyProfile`] is the full set of dials that makes one opponent
//! feel "easier" or "harder" than another: how often it answers correctly,
//! how long it takes, how much its timing wobbles, and how often it visibly
//! struggles. Profiles are immutable value objects built once by
//! [`preset_for`] and shared read-only across every agent of the same tier.
//!
//! `accuracy_rate` and `mistake_rate` are independent dials — they do not
//! sum to 1. Accuracy drives the correctness coin-flip in the decision
//! engine; mistake rate only feeds hint/struggle presentation upstream.

use serde::{Deserialize, Serialize};

/// Skill tier of an AI opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyTier {
    /// Slow, frequently wrong. The warm-up opponent.
    Beginner,
    /// Middle of the pack, errs on the careful side.
    Steady,
    /// Quick and usually right.
    Skilled,
    /// Near-instant, near-perfect. Beatable but rarely.
    Expert,
}

impl DifficultyTier {
    /// All tiers, easiest first.
    pub const ALL: [DifficultyTier; 4] = [
        DifficultyTier::Beginner,
        DifficultyTier::Steady,
        DifficultyTier::Skilled,
        DifficultyTier::Expert,
    ];
}

/// Behavior dials for one opponent skill tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultyProfile {
    pub tier: DifficultyTier,
    /// Probability the agent intends to click the round's target (0.0–1.0).
    pub accuracy_rate: f64,
    /// Mean response time in seconds, before jitter and clamping.
    pub avg_response_secs: f64,
    /// Half-width of the symmetric timing jitter, in seconds.
    pub response_variance_secs: f64,
    /// Probability of a visible "struggle" moment (0.0–1.0). Presentation
    /// only — never consulted for correctness.
    pub mistake_rate: f64,
    /// Default label for the tier; an agent's allocated display name takes
    /// precedence in any UI.
    pub display_name: &'static str,
}

/// Named preset for a tier.
pub fn preset_for(tier: DifficultyTier) -> DifficultyProfile {
    match tier {
        DifficultyTier::Beginner => DifficultyProfile {
            tier,
            accuracy_rate: 0.45,
            avg_response_secs: 8.0,
            response_variance_secs: 3.0,
            mistake_rate: 0.35,
            display_name: "Rookie",
        },
        DifficultyTier::Steady => DifficultyProfile {
            tier,
            accuracy_rate: 0.65,
            avg_response_secs: 6.0,
            response_variance_secs: 2.5,
            mistake_rate: 0.20,
            display_name: "Challenger",
        },
        DifficultyTier::Skilled => DifficultyProfile {
            tier,
            accuracy_rate: 0.80,
            avg_response_secs: 4.5,
            response_variance_secs: 2.0,
            mistake_rate: 0.10,
            display_name: "Contender",
        },
        DifficultyTier::Expert => DifficultyProfile {
            tier,
            accuracy_rate: 0.93,
            avg_response_secs: 3.0,
            response_variance_secs: 1.5,
            mistake_rate: 0.05,
            display_name: "Champion",
        },
    }
}

/// Deterministic tier distribution for a room of `count` AI opponents.
///
/// Cycles the tiers easiest-first (Beginner, Steady, Skilled, Expert), which
/// gives every window of four opponents one easy, two middle, and one hard —
/// a room never ends up all-Expert or all-Beginner. Same input, same output.
pub fn profile_mix(count: usize) -> Vec<DifficultyTier> {
    (0..count)
        .map(|i| DifficultyTier::ALL[i % DifficultyTier::ALL.len()])
        .collect()
}
