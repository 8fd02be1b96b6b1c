//! Synthetic results generator for demos and dry runs.
//!
//! Produces a well-formed feed for a round-robin season: every club plays
//! exactly once per matchday, so the generated stream exercises the same
//! boundary detection as a real feed. Scores are random; with a fixed seed
//! the whole season is reproducible.

use std::collections::VecDeque;

use anyhow::Result;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::source::LineSource;
use crate::engine::grammar;

/// Fictional club pool; counts beyond it fall back to numbered clubs.
const CLUB_NAMES: [&str; 20] = [
    "Lions",
    "Snakes",
    "Tarantulas",
    "FC Awesome",
    "Grouches",
    "Red Hawks",
    "Blue Harbour",
    "Northgate United",
    "Atletico Verde",
    "Real Costa",
    "Dynamo Ridge",
    "Old Quarter",
    "Eastern Stars",
    "Silver Falcons",
    "Port Vale Rovers",
    "Crystal Bay",
    "Iron Forge",
    "Golden Plains",
    "Western Wolves",
    "Rapid Summit",
];

/// Pre-generated season of match lines, drained one per `next_line` call.
pub struct SyntheticFixtures {
    queue: VecDeque<String>,
}

impl SyntheticFixtures {
    /// Generate `rounds` full matchdays for `teams` clubs.
    ///
    /// `teams` must be even and at least 2 (`Config::validate` enforces
    /// this before construction); a season longer than the round-robin
    /// cycle repeats the pairing pattern with fresh scores.
    pub fn new(teams: usize, rounds: u32, seed: Option<u64>) -> Self {
        debug_assert!(teams >= 2 && teams % 2 == 0, "club count must be even");
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let names: Vec<String> = (0..teams)
            .map(|i| match CLUB_NAMES.get(i) {
                Some(name) => (*name).to_string(),
                None => format!("Club {}", i + 1),
            })
            .collect();

        let mut queue = VecDeque::new();
        for round in 0..rounds as usize {
            for (home, away) in round_pairings(teams, round) {
                let line = format!(
                    "{} {}, {} {}",
                    names[home],
                    rng.gen_range(0..=4),
                    names[away],
                    rng.gen_range(0..=4)
                );
                debug_assert!(
                    grammar::is_valid_line(&line),
                    "generated malformed line: {}",
                    line
                );
                queue.push_back(line);
            }
        }
        SyntheticFixtures { queue }
    }
}

#[async_trait]
impl LineSource for SyntheticFixtures {
    async fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.queue.pop_front())
    }

    fn name(&self) -> &str {
        "synthetic fixtures"
    }
}

/// Circle-method pairings: club 0 stays fixed, the rest rotate one slot
/// per round. Requires an even, non-zero club count.
fn round_pairings(teams: usize, round: usize) -> Vec<(usize, usize)> {
    let mut ring: Vec<usize> = (1..teams).collect();
    ring.rotate_right(round % (teams - 1).max(1));
    let mut slots = Vec::with_capacity(teams);
    slots.push(0);
    slots.extend(ring);
    (0..teams / 2)
        .map(|i| (slots[i], slots[teams - 1 - i]))
        .collect()
}
