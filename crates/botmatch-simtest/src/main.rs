//! Botmatch Headless Simulation Harness
//!
//! Validates the opponent-simulation logic end to end without a game server.
//! Runs entirely in-process — no networking, no timers beyond the engine's
//! own scheduler, no rendering.
//!
//! Usage:
//!   cargo run -p botmatch-simtest
//!   cargo run -p botmatch-simtest -- --verbose

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use botmatch_logic::decision::{decide, Clue};
use botmatch_logic::grid::Grid;
use botmatch_logic::names;
use botmatch_logic::profiles::{preset_for, DifficultyTier};
use botmatch_logic::roster::{balanced_difficulty_mix, build_roster, decide_for_room,
    roster_as_participants};
use botmatch_logic::timing::{response_time, MAX_RESPONSE_SECS, MIN_RESPONSE_SECS};

/// Symbol alphabet the shipped game deals boards from.
const CAREER_SYMBOLS: [&str; 9] = [
    "DOCTOR", "CHEF", "PILOT", "VET", "NURSE", "FARMER", "ARTIST", "CODER", "TEACHER",
];

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn check(name: &str, passed: bool, detail: impl Into<String>) -> TestResult {
    TestResult {
        name: name.to_string(),
        passed,
        detail: detail.into(),
    }
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Botmatch Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Difficulty presets and room mix
    results.extend(validate_profiles());

    // 2. Name allocation under exhaustion
    results.extend(validate_names());

    // 3. Decision properties over large samples
    results.extend(validate_decisions());

    // 4. Timing bounds sweep
    results.extend(validate_timing());

    // 5. Full room round
    results.extend(validate_room_round(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Profiles ─────────────────────────────────────────────────────────

fn validate_profiles() -> Vec<TestResult> {
    let mut results = Vec::new();

    let mut monotone = true;
    let presets: Vec<_> = DifficultyTier::ALL.iter().map(|&t| preset_for(t)).collect();
    for pair in presets.windows(2) {
        monotone &= pair[1].accuracy_rate > pair[0].accuracy_rate
            && pair[1].avg_response_secs < pair[0].avg_response_secs;
    }
    results.push(check(
        "preset ordering",
        monotone,
        "accuracy rises and timing falls across tiers",
    ));

    let mix = balanced_difficulty_mix(50);
    let count = |t| mix.iter().filter(|&&m| m == t).count();
    let counts = (
        count(DifficultyTier::Beginner),
        count(DifficultyTier::Steady),
        count(DifficultyTier::Skilled),
        count(DifficultyTier::Expert),
    );
    results.push(check(
        "mix of 50",
        counts == (13, 13, 12, 12),
        format!("tier counts {counts:?}"),
    ));

    results
}

// ── 2. Names ────────────────────────────────────────────────────────────

fn validate_names() -> Vec<TestResult> {
    let mut rng = StdRng::seed_from_u64(101);
    let mut used = HashSet::new();

    // Far past pool size to force the suffix fallback.
    let mut all_unique = true;
    for _ in 0..120 {
        let name = names::allocate(&used, &mut rng);
        all_unique &= !used.contains(&name);
        used.insert(name);
    }

    vec![check(
        "name allocation",
        all_unique && used.len() == 120,
        format!("{} unique names allocated", used.len()),
    )]
}

// ── 3. Decisions ────────────────────────────────────────────────────────

fn validate_decisions() -> Vec<TestResult> {
    let mut rng = StdRng::seed_from_u64(202);
    let mut results = Vec::new();

    let clue = Clue::new("DOCTOR");
    let grid = Grid::shuffled(&CAREER_SYMBOLS, 3, 3, &mut rng);

    let mut perfect = preset_for(DifficultyTier::Expert);
    perfect.accuracy_rate = 1.0;
    let mut always_hit = true;
    for _ in 0..1000 {
        let d = decide(&clue, &grid, &perfect, &mut rng);
        always_hit &= d.chosen_symbol == "DOCTOR";
    }
    results.push(check(
        "accuracy 1.0",
        always_hit,
        "1000/1000 decisions hit the target",
    ));

    let mut hopeless = preset_for(DifficultyTier::Beginner);
    hopeless.accuracy_rate = 0.0;
    let mut never_hit = true;
    for _ in 0..1000 {
        let d = decide(&clue, &grid, &hopeless, &mut rng);
        never_hit &= d.chosen_symbol != "DOCTOR";
    }
    results.push(check(
        "accuracy 0.0",
        never_hit,
        "1000/1000 decisions missed the target",
    ));

    let mut consistent = true;
    let middling = preset_for(DifficultyTier::Steady);
    for _ in 0..1000 {
        let d = decide(&clue, &grid, &middling, &mut rng);
        let Some(pos) = d.position else {
            consistent = false;
            break;
        };
        consistent &= grid.symbol_at(pos) == Some(d.chosen_symbol.as_str());
    }
    results.push(check(
        "position invariant",
        consistent,
        "every position addresses its chosen symbol",
    ));

    results
}

// ── 4. Timing ───────────────────────────────────────────────────────────

fn validate_timing() -> Vec<TestResult> {
    let mut rng = StdRng::seed_from_u64(303);
    let mut in_bounds = true;

    for tier in DifficultyTier::ALL {
        let profile = preset_for(tier);
        for _ in 0..1000 {
            for is_correct in [true, false] {
                let t = response_time(&profile, is_correct, &mut rng);
                in_bounds &= (MIN_RESPONSE_SECS..=MAX_RESPONSE_SECS).contains(&t);
            }
        }
    }

    vec![check(
        "timing bounds",
        in_bounds,
        format!("8000 samples within [{MIN_RESPONSE_SECS}, {MAX_RESPONSE_SECS}]s"),
    )]
}

// ── 5. Full room round ──────────────────────────────────────────────────

fn validate_room_round(verbose: bool) -> Vec<TestResult> {
    let mut rng = StdRng::seed_from_u64(404);
    let mut results = Vec::new();

    let agents = build_roster(50, &CAREER_SYMBOLS, 3, 3, &mut rng);
    let names: HashSet<&str> = agents.iter().map(|a| a.display_name.as_str()).collect();
    results.push(check(
        "roster names",
        names.len() == 50,
        format!("{} unique names across 50 agents", names.len()),
    ));

    let room = roster_as_participants(&agents);
    let clue = Clue::new("VET");
    let decisions = decide_for_room(&clue, &room, &mut rng);
    results.push(check(
        "room decisions",
        decisions.len() == 50,
        format!("{} decisions for 50 AI participants", decisions.len()),
    ));

    let staggered = {
        let times: HashSet<String> = decisions
            .values()
            .map(|d| format!("{:.2}", d.response_secs))
            .collect();
        times.len() > 10
    };
    results.push(check(
        "staggered timing",
        staggered,
        "response times spread instead of clustering on one value",
    ));

    if verbose {
        let sample = decisions.iter().next();
        if let Some((id, decision)) = sample {
            println!(
                "  sample decision for {id}: {}",
                serde_json::to_string_pretty(decision).unwrap_or_default()
            );
        }
    }

    results
}
