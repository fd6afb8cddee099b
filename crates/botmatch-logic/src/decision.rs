//! Per-agent click decision.
//!
//! One call per (agent, round): given the round's clue, the agent's board,
//! and its difficulty profile, decide what the agent clicks, where, how
//! confident it looks, and how long it takes. The whole path is synchronous
//! and never fails — a target missing from this particular board (possible
//! when boards are dealt from a larger alphabet) degrades to a random click
//! at low confidence instead of aborting the round for everyone else.

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::grid::{Grid, Position};
use crate::profiles::DifficultyProfile;
use crate::timing;

/// The round's input: the symbol every participant is hunting for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clue {
    pub target_symbol: String,
}

impl Clue {
    pub fn new(target_symbol: impl Into<String>) -> Self {
        Self {
            target_symbol: target_symbol.into(),
        }
    }
}

/// Confidence band for an intended-correct answer.
const CONFIDENT_RANGE: std::ops::RangeInclusive<f64> = 0.8..=1.0;

/// Confidence band for an intended-wrong guess.
const UNSURE_RANGE: std::ops::RangeInclusive<f64> = 0.3..=0.7;

/// Fixed confidence when the decision degraded to a random cell.
const FALLBACK_CONFIDENCE: f64 = 0.3;

/// The computed outcome of one agent's turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClickDecision {
    /// Symbol the agent clicks.
    pub chosen_symbol: String,
    /// Cell on the agent's own board holding `chosen_symbol`. `None` only
    /// when the board is empty — the degenerate no-cell-to-click case.
    pub position: Option<Position>,
    /// Seconds until the click should arrive, clamped to [1.0, 15.0].
    pub response_secs: f64,
    /// Presentation signal in [0.0, 1.0]; never consulted for correctness.
    pub confidence: f64,
}

/// Decide what this agent clicks for the round.
///
/// The accuracy coin-flip picks an intended outcome, the intended symbol is
/// located on the board, and the response time is modeled from whether the
/// *final* chosen symbol is actually correct — so an agent whose wrong guess
/// falls back onto the target cell earns the faster "knew it" timing. That
/// coupling matches the shipped game and is deliberate.
pub fn decide(
    clue: &Clue,
    grid: &Grid,
    profile: &DifficultyProfile,
    rng: &mut impl Rng,
) -> ClickDecision {
    let intends_correct = rng.gen_bool(profile.accuracy_rate.clamp(0.0, 1.0));

    let (intended_symbol, confidence) = if intends_correct {
        (
            Some(clue.target_symbol.clone()),
            rng.gen_range(CONFIDENT_RANGE),
        )
    } else {
        // Wrong on purpose: any distinct symbol except the target. A board
        // with nothing but the target has no wrong answer to give.
        let decoys: Vec<&str> = grid
            .distinct_symbols()
            .into_iter()
            .filter(|s| *s != clue.target_symbol)
            .collect();
        (
            decoys.choose(rng).map(|s| s.to_string()),
            rng.gen_range(UNSURE_RANGE),
        )
    };

    let located = intended_symbol
        .as_ref()
        .and_then(|symbol| grid.find(symbol).map(|pos| (symbol.clone(), pos)));

    let (chosen_symbol, position, confidence) = match located {
        Some((symbol, pos)) => (symbol, Some(pos), confidence),
        None => {
            // Intended symbol absent from this board. Click somewhere
            // plausible rather than dropping the agent from the round.
            warn!(
                "target {:?} absent from a {}x{} board, falling back to a random cell",
                intended_symbol.as_deref().unwrap_or(&clue.target_symbol),
                grid.rows(),
                grid.cols(),
            );
            match grid.random_position(rng) {
                Some(pos) => {
                    let symbol = grid
                        .symbol_at(pos)
                        .unwrap_or(&clue.target_symbol)
                        .to_string();
                    (symbol, Some(pos), FALLBACK_CONFIDENCE)
                }
                None => (
                    clue.target_symbol.clone(),
                    None,
                    FALLBACK_CONFIDENCE,
                ),
            }
        }
    };

    let is_correct = chosen_symbol == clue.target_symbol;
    let response_secs = timing::response_time(profile, is_correct, rng);

    debug!(
        "decision: symbol={chosen_symbol} correct={is_correct} \
         confidence={confidence:.2} response={response_secs}s"
    );

    ClickDecision {
        chosen_symbol,
        position,
        response_secs,
        confidence,
    }
}
