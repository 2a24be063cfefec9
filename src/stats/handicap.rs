use serde::{Deserialize, Serialize};

/// Turns a golfer's prior rounds (oldest first) into a handicap.
///
/// Implementations must be pure and return `0` for an empty slice.
pub trait HandicapStrategy: Send + Sync {
    fn handicap(&self, scores: &[i32]) -> i32;
}

impl<F> HandicapStrategy for F
where
    F: Fn(&[i32]) -> i32 + Send + Sync,
{
    fn handicap(&self, scores: &[i32]) -> i32 {
        self(scores)
    }
}

pub const DEFAULT_WINDOW: usize = 10;
pub const DEFAULT_COUNTED: usize = 5;
/// Nine-hole par.
pub const DEFAULT_PAR: i32 = 36;
pub const DEFAULT_ALLOWANCE: f64 = 0.8;

/// League handicap: the best `counted` of the last `window` rounds, averaged,
/// measured against `par` and scaled by `allowance`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct BestOfRecent {
    pub window: usize,
    pub counted: usize,
    pub par: i32,
    pub allowance: f64,
}

impl Default for BestOfRecent {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            counted: DEFAULT_COUNTED,
            par: DEFAULT_PAR,
            allowance: DEFAULT_ALLOWANCE,
        }
    }
}

impl HandicapStrategy for BestOfRecent {
    #[allow(clippy::cast_possible_truncation)]
    fn handicap(&self, scores: &[i32]) -> i32 {
        if scores.is_empty() || self.counted == 0 {
            return 0;
        }

        let recent = &scores[scores.len().saturating_sub(self.window)..];
        let mut best = recent.to_vec();
        best.sort_unstable();
        best.truncate(self.counted);

        let differential = super::average(&best) - f64::from(self.par);
        (differential * self.allowance).round() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_has_no_handicap() {
        assert_eq!(BestOfRecent::default().handicap(&[]), 0);
    }

    #[test]
    fn short_history_uses_every_round() {
        // avg 46 -> (46 - 36) * 0.8 = 8
        assert_eq!(BestOfRecent::default().handicap(&[44, 48]), 8);
    }

    #[test]
    fn only_best_of_recent_rounds_count() {
        // The two 30s fall outside the last ten rounds.
        let mut scores = vec![30, 30];
        scores.extend([40, 41, 42, 43, 44, 50, 51, 52, 53, 54]);
        // best five of the last ten: 40..=44, avg 42 -> 6 * 0.8 = 4.8 -> 5
        assert_eq!(BestOfRecent::default().handicap(&scores), 5);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        let strategy = BestOfRecent {
            allowance: 1.0,
            ..BestOfRecent::default()
        };
        assert_eq!(strategy.handicap(&[38, 39]), 3);
        assert_eq!(strategy.handicap(&[33, 34]), -3);
    }

    #[test]
    fn closures_are_strategies() {
        let flat = |_: &[i32]| 7;
        assert_eq!(flat.handicap(&[1, 2, 3]), 7);
    }
}
