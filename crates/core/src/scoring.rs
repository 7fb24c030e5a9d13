//! Scoring and level progression.
//!
//! Classic table scoring: 40/100/300/1200 points for 1/2/3/4 rows, times the
//! current level. The level starts at 1 and goes up once the total line
//! count crosses `10 x level`; the game retunes its gravity speed on each
//! level-up.

use gridfall_types::LINE_SCORES;

/// Points awarded for clearing `n` rows at once, before the level
/// multiplier.
pub fn line_points(n: usize) -> u32 {
    if n == 0 || n > 4 {
        return 0;
    }
    LINE_SCORES[n]
}

/// Score, level and line totals. Plain data, read by the shell every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreState {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl ScoreState {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: 1,
            lines: 0,
        }
    }

    /// Record `n` cleared rows. Returns whether the level went up, in which
    /// case the caller retunes the drop speed.
    ///
    /// The level check is the integer form of `lines / 10 > level`; the
    /// score uses the level in effect before any increment.
    pub fn record_clear(&mut self, n: usize) -> bool {
        self.lines += n as u32;
        self.score += line_points(n) * self.level;

        if self.lines > 10 * self.level {
            self.level += 1;
            return true;
        }
        false
    }
}

impl Default for ScoreState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_points_table() {
        assert_eq!(line_points(0), 0);
        assert_eq!(line_points(1), 40);
        assert_eq!(line_points(2), 100);
        assert_eq!(line_points(3), 300);
        assert_eq!(line_points(4), 1200);
        assert_eq!(line_points(5), 0);
    }

    #[test]
    fn score_scales_with_level() {
        let mut state = ScoreState {
            score: 0,
            level: 3,
            lines: 25,
        };
        state.record_clear(2);
        assert_eq!(state.score, 100 * 3);
        assert_eq!(state.lines, 27);
    }

    #[test]
    fn level_up_exactly_when_lines_cross_ten_times_level() {
        let mut state = ScoreState::new();

        // 10 lines: 10 / 10 == 1, not > 1 -> still level 1.
        for _ in 0..5 {
            assert!(!state.record_clear(2));
        }
        assert_eq!(state.level, 1);

        // The 11th line tips it over.
        assert!(state.record_clear(1));
        assert_eq!(state.level, 2);
        assert_eq!(state.lines, 11);
    }

    #[test]
    fn level_up_score_uses_pre_increment_level() {
        let mut state = ScoreState {
            score: 0,
            level: 1,
            lines: 10,
        };
        assert!(state.record_clear(4));
        // 1200 x level 1, not level 2.
        assert_eq!(state.score, 1200);
        assert_eq!(state.level, 2);
    }

    #[test]
    fn level_increments_once_per_clear() {
        let mut state = ScoreState {
            score: 0,
            level: 1,
            lines: 18,
        };
        // Crossing well past the threshold still bumps a single level.
        assert!(state.record_clear(4));
        assert_eq!(state.level, 2);
    }
}
