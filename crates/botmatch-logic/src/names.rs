//! Display-name allocation for AI opponents.
//!
//! Opponents get human-style names ("first name + last initial") so a lobby
//! full of bots reads like a lobby full of kids. Two collision classes are
//! filtered out of the pool before any draw happens: the platform's fixed
//! companion characters (matched on first name, whatever the initial) and
//! the fixed demo-human names (matched on the full name+initial combo).
//!
//! The allocator holds no session state. The caller owns the `used` set and
//! is expected to insert each returned name before asking for the next one,
//! which lets one allocator serve any number of rooms.

use std::collections::HashSet;
use std::sync::OnceLock;

use rand::seq::SliceRandom;
use rand::Rng;

// Raw candidates, filtered once against the reserved lists below.
static CANDIDATE_NAMES: &[&str] = &[
    "Ava R.", "Ben K.", "Caleb M.", "Chloe S.", "Daniel P.", "Delia F.",
    "Eli T.", "Emma W.", "Felix O.", "Grace H.", "Hana Y.", "Isaac N.",
    "Ivy C.", "Jaden L.", "Jasmine A.", "Kai D.", "Kira V.", "Leo G.",
    "Lily B.", "Luna P.", "Marcus J.", "Maya K.", "Mia Q.", "Nadia Z.",
    "Noah E.", "Nova S.", "Oliver F.", "Omar H.", "Paige T.", "Priya R.",
    "Quinn M.", "Ravi S.", "Riley J.", "Rosa V.", "Sana M.", "Sofia L.",
    "Tariq B.", "Tessa N.", "Theo W.", "Uma D.", "Vik A.", "Wes C.",
    "Willow G.", "Xander P.", "Yara O.", "Yusuf K.", "Zoe T.", "Zain R.",
];

/// First names of the platform's companion characters. An opponent named
/// "Nova S." next to the Nova companion reads as the same character.
static RESERVED_FIRST_NAMES: &[&str] = &["Nova", "Luna", "Pip", "Sage"];

/// Full name+initial combos used by the fixed demo humans.
static RESERVED_FULL_NAMES: &[&str] = &["Ava R.", "Leo G.", "Mia Q."];

/// The eligible pool — candidates minus both reserved lists, built once.
fn name_pool() -> &'static [&'static str] {
    static POOL: OnceLock<Vec<&'static str>> = OnceLock::new();
    POOL.get_or_init(|| {
        CANDIDATE_NAMES
            .iter()
            .copied()
            .filter(|name| {
                let first = name.split_whitespace().next().unwrap_or(name);
                !RESERVED_FIRST_NAMES.contains(&first) && !RESERVED_FULL_NAMES.contains(name)
            })
            .collect()
    })
}

/// Allocate a display name not present in `used`.
///
/// Draws uniformly from the unused remainder of the pool. When every pool
/// name is taken, falls back to a random pool name with a random numeric
/// suffix, retrying until the result is unique — exhaustion is never an
/// error. The caller adds the returned name to `used` before the next call.
pub fn allocate(used: &HashSet<String>, rng: &mut impl Rng) -> String {
    let available: Vec<&str> = name_pool()
        .iter()
        .copied()
        .filter(|name| !used.contains(*name))
        .collect();

    if let Some(name) = available.choose(rng) {
        return (*name).to_string();
    }

    // Pool exhausted; suffix space (10..1000) dwarfs any realistic room.
    loop {
        let base = name_pool()
            .choose(rng)
            .expect("name pool is a non-empty static");
        let candidate = format!("{} {}", base, rng.gen_range(10..1000));
        if !used.contains(&candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn pool_excludes_reserved_names() {
        for name in name_pool() {
            let first = name.split_whitespace().next().unwrap();
            assert!(
                !RESERVED_FIRST_NAMES.contains(&first),
                "{name} collides with a companion character"
            );
            assert!(
                !RESERVED_FULL_NAMES.contains(name),
                "{name} collides with a demo human"
            );
        }
    }

    #[test]
    fn pool_is_nonempty_after_filtering() {
        assert!(name_pool().len() > 30);
    }

    #[test]
    fn allocate_avoids_used_names() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut used = HashSet::new();
        for _ in 0..20 {
            let name = allocate(&used, &mut rng);
            assert!(!used.contains(&name));
            used.insert(name);
        }
    }

    #[test]
    fn allocate_survives_pool_exhaustion() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut used = HashSet::new();
        // Pool size plus 50 forces the suffix fallback.
        let total = name_pool().len() + 50;
        for _ in 0..total {
            let name = allocate(&used, &mut rng);
            assert!(!used.contains(&name), "duplicate name {name}");
            let first = name.split_whitespace().next().unwrap();
            assert!(!RESERVED_FIRST_NAMES.contains(&first));
            assert!(!RESERVED_FULL_NAMES.contains(&name.as_str()));
            used.insert(name);
        }
        assert_eq!(used.len(), total);
    }

    #[test]
    fn fallback_names_extend_pool_names() {
        let mut rng = StdRng::seed_from_u64(3);
        let used: HashSet<String> = name_pool().iter().map(|n| n.to_string()).collect();
        let name = allocate(&used, &mut rng);
        assert!(
            name_pool().iter().any(|base| name.starts_with(base)),
            "{name} should be a suffixed pool name"
        );
    }
}
