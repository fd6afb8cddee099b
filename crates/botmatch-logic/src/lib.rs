//! Pure AI-opponent simulation logic for Botmatch.
//!
//! This crate drives the computer-controlled players of a bingo-style trivia
//! game. Each round, every AI opponent must look believable: it "knows" the
//! answer or it doesn't, it clicks a cell of its own board, and it does so
//! after a skill-dependent delay instead of instantly. Everything here is
//! plain data and pure functions — the only wall-clock touchpoint is the
//! [`scheduler`] module, and the only randomness is an injected
//! [`rand::Rng`], so every behavior is reproducible under a seeded generator.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`profiles`] | Difficulty tiers, named presets, balanced room mix |
//! | [`names`] | Unique human-style display names from a reserved-filtered pool |
//! | [`grid`] | An agent's personal symbol board, search and board dealing |
//! | [`decision`] | Per-agent click decision (what, where, how confidently) |
//! | [`timing`] | Bounded, jittered response-time model |
//! | [`roster`] | Room-wide decision fan-out and session roster setup |
//! | [`scheduler`] | Cancellable deferred delivery of computed clicks |

pub mod decision;
pub mod grid;
pub mod names;
pub mod profiles;
pub mod roster;
pub mod scheduler;
pub mod timing;
