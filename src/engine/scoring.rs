//! League points rules: 3 for a win, 1 apiece for a draw, 0 for a loss.

/// Points credited to the winner of a decided match.
pub const WIN_POINTS: u32 = 3;
/// Points credited to each side of a drawn match.
pub const DRAW_POINTS: u32 = 1;
/// Points credited to the loser of a decided match.
pub const LOSS_POINTS: u32 = 0;

/// Result of one match from the perspective of the two listed sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The first-listed team scored more goals.
    FirstWin,
    /// The second-listed team scored more goals.
    SecondWin,
    /// Both teams scored the same number of goals.
    Draw,
}

/// Classify a final score. Goals compare numerically, so 10 beats 9.
pub fn classify(first: u32, second: u32) -> MatchOutcome {
    if first > second {
        MatchOutcome::FirstWin
    } else if first < second {
        MatchOutcome::SecondWin
    } else {
        MatchOutcome::Draw
    }
}

/// Points awarded to the (first, second) listed teams for an outcome.
pub fn points_awarded(outcome: MatchOutcome) -> (u32, u32) {
    match outcome {
        MatchOutcome::FirstWin => (WIN_POINTS, LOSS_POINTS),
        MatchOutcome::SecondWin => (LOSS_POINTS, WIN_POINTS),
        MatchOutcome::Draw => (DRAW_POINTS, DRAW_POINTS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_first_win() {
        assert_eq!(classify(3, 1), MatchOutcome::FirstWin);
    }

    #[test]
    fn test_classify_second_win() {
        assert_eq!(classify(0, 2), MatchOutcome::SecondWin);
    }

    #[test]
    fn test_classify_draw() {
        assert_eq!(classify(2, 2), MatchOutcome::Draw);
        assert_eq!(classify(0, 0), MatchOutcome::Draw);
    }

    #[test]
    fn test_classify_compares_numerically() {
        // Double-digit goals must beat single digits, not lose lexically.
        assert_eq!(classify(10, 9), MatchOutcome::FirstWin);
    }

    #[test]
    fn test_points_awarded() {
        assert_eq!(points_awarded(MatchOutcome::FirstWin), (3, 0));
        assert_eq!(points_awarded(MatchOutcome::SecondWin), (0, 3));
        assert_eq!(points_awarded(MatchOutcome::Draw), (1, 1));
    }

    #[test]
    fn test_match_distributes_three_points_or_two() {
        for (a, b) in [(4, 0), (0, 4), (2, 2), (1, 0), (0, 0)] {
            let (pa, pb) = points_awarded(classify(a, b));
            let expected = if a == b { 2 } else { 3 };
            assert_eq!(pa + pb, expected);
        }
    }
}
