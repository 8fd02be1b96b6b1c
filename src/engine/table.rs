//! The league table state machine.
//!
//! One `LeagueTable` consumes the results feed a line at a time and tracks,
//! per team, matches played and points earned. It has no notion of fixture
//! lists; the boundary between one matchday and the next is inferred from
//! the games-played distribution:
//!
//! ```text
//!   line ──▶ process_line
//!              ├─ "END" sentinel: uniform played counts close the matchday
//!              │                  (snapshot = standings as they stand)
//!              └─ match result:   apply goals as 3/1/0 points, then a
//!                                 uniform → two-distinct played-count
//!                                 transition closes the PREVIOUS matchday
//!                                 (snapshot = standings before this match)
//! ```
//!
//! A closed matchday stays observable only until the next accepted line;
//! every call re-decides the completion state from scratch.

use std::collections::{HashMap, HashSet};

use super::grammar::{self, LineError, TeamScore, END_SENTINEL};
use super::scoring;

/// Verdict for one feed line. Rejection is a normal outcome for arbitrary
/// text, never a failure: it leaves the table untouched and carries the
/// grammar's diagnosis so the caller can log, count, or abort as policy
/// dictates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line was a match result or the sentinel and has been applied.
    Accepted,
    /// The line matched neither accepted shape; no state changed.
    Rejected(LineError),
}

/// Running league standings with matchday-boundary detection.
///
/// Calls must be serialized by the owner. The table performs one atomic
/// state transition per `process_line` and never logs or prints.
#[derive(Debug, Default)]
pub struct LeagueTable {
    /// Matches processed per team, including any partial matchday.
    games_played: HashMap<String, u32>,
    /// (team, points), kept sorted by descending points then ascending name
    /// after every accepted match.
    table: Vec<(String, u32)>,
    /// Standings captured at the most recent matchday boundary. `Some` if
    /// and only if the last processed line closed a matchday.
    completed: Option<Vec<(String, u32)>>,
    /// Count of matchday boundaries detected so far. Never decreases.
    matchdays_completed: u32,
}

impl LeagueTable {
    pub fn new() -> Self {
        LeagueTable::default()
    }

    /// Feed one trimmed input line into the table.
    ///
    /// Two shapes are accepted: a `TeamA 3, TeamB 1` match result, which
    /// updates played counts and points, and the `END` sentinel, which only
    /// probes for a matchday boundary. After this returns,
    /// `is_matchday_complete` tells whether THIS call closed a matchday.
    pub fn process_line(&mut self, line: &str) -> LineOutcome {
        if line == END_SENTINEL {
            if self.played_counts_uniform() {
                // The sentinel changes no scores, so the boundary snapshot
                // is the table exactly as it stands.
                let snapshot = self.table.clone();
                self.close_matchday(snapshot);
            } else {
                self.completed = None;
            }
            return LineOutcome::Accepted;
        }

        let (first, second) = match grammar::parse_match_line(line) {
            Ok(results) => results,
            Err(reason) => return LineOutcome::Rejected(reason),
        };

        let was_uniform = self.played_counts_uniform();
        let before = self.table.clone();
        self.apply_result(&first, &second);

        // A result that breaks an even played-count distribution means the
        // previous matchday had already finished: everything before this
        // match is the closed table.
        if was_uniform && self.distinct_played_counts() == 2 {
            self.close_matchday(before);
        } else {
            self.completed = None;
        }

        self.sort_table();
        LineOutcome::Accepted
    }

    /// Matches processed per team. Teams appear from their first accepted
    /// result; absent means zero.
    #[allow(dead_code)]
    pub fn games_played(&self) -> &HashMap<String, u32> {
        &self.games_played
    }

    /// The cumulative table, sorted by descending points then ascending
    /// team name.
    pub fn standings(&self) -> &[(String, u32)] {
        &self.table
    }

    /// True when the most recent call closed a matchday.
    pub fn is_matchday_complete(&self) -> bool {
        self.completed.is_some()
    }

    /// The table as it stood when the last matchday closed, truncated to
    /// the top `limit` rows (all rows when `None`). Returns `None` unless
    /// the most recent call closed a matchday. Reading never mutates;
    /// repeated calls return the same rows until the next `process_line`.
    pub fn matchday_snapshot(&self, limit: Option<usize>) -> Option<&[(String, u32)]> {
        self.completed.as_deref().map(|rows| {
            let take = limit.unwrap_or(rows.len()).min(rows.len());
            &rows[..take]
        })
    }

    /// How many matchday boundaries have been detected so far.
    pub fn completed_matchdays(&self) -> u32 {
        self.matchdays_completed
    }

    /// True when every known team has played the same number of matches.
    /// Vacuously true before any result has been accepted.
    fn played_counts_uniform(&self) -> bool {
        let mut counts = self.games_played.values();
        match counts.next() {
            Some(first) => counts.all(|count| count == first),
            None => true,
        }
    }

    fn distinct_played_counts(&self) -> usize {
        self.games_played.values().collect::<HashSet<_>>().len()
    }

    /// Explicit zero-default read of a team's points. A team the table has
    /// never seen is on zero points, and this is the only place that rule
    /// lives.
    fn points_of(table: &[(String, u32)], team: &str) -> u32 {
        table
            .iter()
            .find(|(name, _)| name == team)
            .map(|(_, points)| *points)
            .unwrap_or(0)
    }

    /// Credit points to a team, creating its row on first sight. A loser
    /// earns 0 but still enters the table.
    fn add_points(&mut self, team: &str, points: u32) {
        let total = Self::points_of(&self.table, team) + points;
        if let Some(entry) = self.table.iter_mut().find(|(name, _)| name == team) {
            entry.1 = total;
        } else {
            self.table.push((team.to_string(), total));
        }
    }

    fn apply_result(&mut self, first: &TeamScore, second: &TeamScore) {
        *self.games_played.entry(first.team.clone()).or_insert(0) += 1;
        *self.games_played.entry(second.team.clone()).or_insert(0) += 1;

        let outcome = scoring::classify(first.score, second.score);
        let (first_points, second_points) = scoring::points_awarded(outcome);
        self.add_points(&first.team, first_points);
        self.add_points(&second.team, second_points);
    }

    fn close_matchday(&mut self, snapshot: Vec<(String, u32)>) {
        self.completed = Some(snapshot);
        self.matchdays_completed += 1;
    }

    fn sort_table(&mut self) {
        self.table
            .sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    }
}
