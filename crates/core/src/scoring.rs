//! Scoring module - lock and line clear points
//!
//! Every lock is worth a flat [`LOCK_SCORE`]; the lines it completes add a
//! bonus from a fixed non-linear table, so a four-line clear is worth far more
//! than four singles.

use crate::types::{LINE_SCORES, LOCK_SCORE};

/// Line clear bonus for the given number of lines cleared by one lock.
///
/// 1 → 100, 2 → 300, 3 → 500, 4 → 800, anything else → 0.
pub fn line_clear_score(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

/// Total points for one lock that cleared `lines` lines
pub fn lock_score(lines: usize) -> u32 {
    LOCK_SCORE + line_clear_score(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_scores() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 300);
        assert_eq!(line_clear_score(3), 500);
        assert_eq!(line_clear_score(4), 800);
        assert_eq!(line_clear_score(5), 0);
        assert_eq!(line_clear_score(22), 0);
    }

    #[test]
    fn test_lock_scores() {
        assert_eq!(lock_score(0), 10);
        assert_eq!(lock_score(1), 110);
        assert_eq!(lock_score(4), 810);
    }
}
