//! Response-time model.
//!
//! How long an opponent "thinks" before its click arrives. Correct answers
//! come in slightly faster than wrong ones (recognizing the right cell is
//! quicker than second-guessing), each profile contributes symmetric jitter,
//! and the result is clamped so no opponent ever answers inhumanly fast or
//! stalls a round.

use rand::Rng;

use crate::profiles::DifficultyProfile;

/// Floor for any response, seconds. Even an Expert visibly "reads" the clue.
pub const MIN_RESPONSE_SECS: f64 = 1.0;

/// Ceiling for any response, seconds. Keeps a struggling Beginner from
/// holding the round hostage.
pub const MAX_RESPONSE_SECS: f64 = 15.0;

/// Speedup applied to the mean when the answer is correct.
const CORRECT_SPEEDUP: f64 = 0.9;

/// Seconds until this agent's click should arrive.
///
/// `base = avg * 0.9` when correct, plus jitter drawn uniformly from
/// `±response_variance_secs`, clamped to `[1.0, 15.0]` and rounded to two
/// decimals for display stability. Pure given its RNG — zero variance yields
/// an exact, repeatable time.
pub fn response_time(profile: &DifficultyProfile, is_correct: bool, rng: &mut impl Rng) -> f64 {
    let base = if is_correct {
        profile.avg_response_secs * CORRECT_SPEEDUP
    } else {
        profile.avg_response_secs
    };
    let jitter = (rng.gen::<f64>() - 0.5) * 2.0 * profile.response_variance_secs;
    let clamped = (base + jitter).clamp(MIN_RESPONSE_SECS, MAX_RESPONSE_SECS);
    (clamped * 100.0).round() / 100.0
}
