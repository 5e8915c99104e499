//! Score constants for Connect Four evaluation
//!
//! Hand-tuned values that give the AI its playing personality. Changing any
//! of them changes which moves the search prefers.

/// Score weights for evaluation
pub struct EvalScore;

impl EvalScore {
    /// Maximizing side has four in a row
    pub const WIN: i64 = 100_000;
    /// Opponent has four in a row.
    /// Much smaller in magnitude than `WIN`, so the AI values its own wins
    /// far above preventing the opponent's. Kept as tuned.
    pub const LOSS: i64 = -1_000;
    /// Full board, nobody won
    pub const DRAW: i64 = 0;

    /// Window counter reached exactly four
    pub const FOUR_IN_WINDOW: i64 = 100;
    /// Base of the per-window run bonus (`BASE^counter`)
    pub const RUN_BASE: i64 = 10;

    /// A side can win on its next drop
    pub const IMMEDIATE_THREAT: i64 = 500;

    /// Cells scanned on each side of a piece
    pub const WINDOW_REACH: isize = 3;
}

/// Run bonus for a window counter value. Non-positive counters score nothing.
#[inline]
pub fn run_bonus(counter: i32) -> i64 {
    match counter {
        4 => EvalScore::FOUR_IN_WINDOW,
        c if c > 0 => EvalScore::RUN_BASE.pow(c as u32),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels_dominate_heuristic() {
        assert!(EvalScore::WIN > EvalScore::IMMEDIATE_THREAT * 10);
        assert!(EvalScore::LOSS < EvalScore::DRAW);
    }

    #[test]
    fn test_sentinel_asymmetry_preserved() {
        assert_eq!(EvalScore::WIN, 100_000);
        assert_eq!(EvalScore::LOSS, -1_000);
        assert!(EvalScore::WIN > -EvalScore::LOSS);
    }

    #[test]
    fn test_run_bonus_values() {
        assert_eq!(run_bonus(-2), 0);
        assert_eq!(run_bonus(0), 0);
        assert_eq!(run_bonus(1), 10);
        assert_eq!(run_bonus(2), 100);
        assert_eq!(run_bonus(3), 1_000);
        // Exactly four is a flat bonus, below the three-run bonus
        assert_eq!(run_bonus(4), 100);
        assert_eq!(run_bonus(5), 100_000);
    }
}
