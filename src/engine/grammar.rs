//! Line grammar for the results feed.
//!
//! Exactly two line shapes are accepted: a two-result match line
//! (`Lions 3, Snakes 1`) and the bare sentinel `END` that marks the end of
//! a matchday's input. The classifier and the extractor below are the only
//! two entry points; the classifier delegates to the extractor, so the two
//! can never disagree about what is well formed.

use thiserror::Error;

/// The only recognized end-of-round marker, compared case-sensitively.
pub const END_SENTINEL: &str = "END";

/// One side's final result: verbatim team name plus goals scored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamScore {
    pub team: String,
    pub score: u32,
}

/// Why a line failed to parse as a match result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// No `", "` between the two results.
    #[error("missing `, ` between the two results")]
    MissingSeparator,
    /// A result clause has no space-separated score at its end.
    #[error("result clause has no trailing score")]
    MissingScore,
    /// The trailing token is not a plain non-negative integer.
    #[error("score is not a non-negative integer")]
    InvalidScore,
    /// Nothing precedes the score.
    #[error("team name is empty")]
    EmptyTeamName,
}

/// True when the line is one of the two accepted shapes: a well-formed
/// two-result line or the sentinel.
pub fn is_valid_line(line: &str) -> bool {
    line == END_SENTINEL || parse_match_line(line).is_ok()
}

/// Extract the two `(team, score)` results from a match line.
///
/// The separator is the first `", "`; within each clause the team name runs
/// greedily up to the clause's final space, so names may contain digits or
/// further commas (`FC Awesome 30 1` reads as FC Awesome 30 scoring once).
/// Names are taken verbatim; team identity is case- and
/// whitespace-sensitive.
pub fn parse_match_line(line: &str) -> Result<(TeamScore, TeamScore), LineError> {
    let (first, second) = line.split_once(", ").ok_or(LineError::MissingSeparator)?;
    Ok((parse_result(first)?, parse_result(second)?))
}

/// Split one result clause into its verbatim name and numeric score.
fn parse_result(clause: &str) -> Result<TeamScore, LineError> {
    let (team, score) = clause.rsplit_once(' ').ok_or(LineError::MissingScore)?;
    if team.is_empty() {
        return Err(LineError::EmptyTeamName);
    }
    if score.is_empty() || !score.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LineError::InvalidScore);
    }
    // The all-digit check has passed, so only overflow can fail here.
    let score: u32 = score.parse().map_err(|_| LineError::InvalidScore)?;
    Ok(TeamScore {
        team: team.to_string(),
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_line() {
        let (a, b) = parse_match_line("Lions 3, Snakes 1").unwrap();
        assert_eq!(
            a,
            TeamScore {
                team: "Lions".into(),
                score: 3
            }
        );
        assert_eq!(
            b,
            TeamScore {
                team: "Snakes".into(),
                score: 1
            }
        );
    }

    #[test]
    fn test_parse_multi_word_names() {
        let (a, b) = parse_match_line("Tarantulas 1, FC Awesome 0").unwrap();
        assert_eq!(a.team, "Tarantulas");
        assert_eq!(b.team, "FC Awesome");
        assert_eq!(b.score, 0);
    }

    #[test]
    fn test_parse_name_with_digits() {
        // The name runs up to the final space, so digits inside names survive.
        let (a, b) = parse_match_line("FC Awesome 30 1, Schalke 04 2").unwrap();
        assert_eq!(a.team, "FC Awesome 30");
        assert_eq!(a.score, 1);
        assert_eq!(b.team, "Schalke 04");
        assert_eq!(b.score, 2);
    }

    #[test]
    fn test_parse_splits_at_first_comma_space() {
        // The second clause's name captures any later ", " greedily.
        let (a, b) = parse_match_line("A 1, B 2, C 3").unwrap();
        assert_eq!(a.team, "A");
        assert_eq!(b.team, "B 2, C");
        assert_eq!(b.score, 3);
    }

    #[test]
    fn test_name_whitespace_is_preserved() {
        // A doubled space leaves one on the name; identity stays verbatim.
        let (a, _) = parse_match_line("A  1, B 2").unwrap();
        assert_eq!(a.team, "A ");
    }

    #[test]
    fn test_rejects_missing_separator() {
        assert_eq!(
            parse_match_line("Lions 3 Snakes 1"),
            Err(LineError::MissingSeparator)
        );
    }

    #[test]
    fn test_rejects_missing_score() {
        assert_eq!(
            parse_match_line("Lions, Snakes 1"),
            Err(LineError::MissingScore)
        );
    }

    #[test]
    fn test_rejects_signed_or_decimal_scores() {
        assert_eq!(
            parse_match_line("Lions -1, Snakes 1"),
            Err(LineError::InvalidScore)
        );
        assert_eq!(
            parse_match_line("Lions 1.5, Snakes 1"),
            Err(LineError::InvalidScore)
        );
        assert_eq!(
            parse_match_line("Lions +2, Snakes 1"),
            Err(LineError::InvalidScore)
        );
    }

    #[test]
    fn test_rejects_trailing_junk() {
        assert_eq!(
            parse_match_line("Lions 4!, Snakes 1"),
            Err(LineError::InvalidScore)
        );
        assert_eq!(
            parse_match_line("Lions 4, Snakes 1 extra"),
            Err(LineError::InvalidScore)
        );
    }

    #[test]
    fn test_rejects_empty_team_name() {
        assert_eq!(
            parse_match_line(" 1, Snakes 1"),
            Err(LineError::EmptyTeamName)
        );
    }

    #[test]
    fn test_rejects_score_overflow() {
        assert_eq!(
            parse_match_line("Lions 99999999999999999999, Snakes 1"),
            Err(LineError::InvalidScore)
        );
    }

    #[test]
    fn test_sentinel_is_valid_but_not_a_match() {
        assert!(is_valid_line(END_SENTINEL));
        assert!(parse_match_line("END").is_err());
    }

    #[test]
    fn test_sentinel_is_case_sensitive() {
        assert!(!is_valid_line("end"));
        assert!(!is_valid_line("End"));
    }

    #[test]
    fn test_classifier_accepts_match_lines() {
        assert!(is_valid_line("Lions 3, Snakes 1"));
        assert!(!is_valid_line("bananas foster"));
        assert!(!is_valid_line(""));
    }
}
