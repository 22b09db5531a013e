//! Mask penalty scoring (four rules, lower is better)

use crate::models::BitMatrix;

const PENALTY_RUN: u32 = 3;
const PENALTY_BLOCK: u32 = 3;
const PENALTY_FINDER_LIKE: u32 = 40;
const PENALTY_BALANCE: u32 = 10;

/// Dark-light-dark-dark-dark-light-dark followed by four light modules
const FINDER_THEN_LIGHT: [bool; 11] = [
    true, false, true, true, true, false, true, false, false, false, false,
];
/// Four light modules followed by dark-light-dark-dark-dark-light-dark
const LIGHT_THEN_FINDER: [bool; 11] = [
    false, false, false, false, true, false, true, true, true, false, true,
];

/// Per-rule penalty totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PenaltyBreakdown {
    /// Rows/columns with 5+ same-colored modules in a row
    pub runs: u32,
    /// 2x2 same-colored blocks
    pub blocks: u32,
    /// 1:1:3:1:1 finder-like sequences with a light margin
    pub finder_like: u32,
    /// Deviation of the dark ratio from 50%
    pub balance: u32,
}

impl PenaltyBreakdown {
    /// Sum of the four rules
    pub fn total(&self) -> u32 {
        self.runs + self.blocks + self.finder_like + self.balance
    }
}

/// Score a finished (masked, format-drawn) square matrix
pub fn score(matrix: &BitMatrix) -> u32 {
    evaluate(matrix).total()
}

/// Per-rule penalties over every row and column
pub fn evaluate(matrix: &BitMatrix) -> PenaltyBreakdown {
    let size = matrix.width();
    let mut line = Vec::with_capacity(size);
    let mut breakdown = PenaltyBreakdown::default();

    for y in 0..size {
        line.clear();
        line.extend((0..size).map(|x| matrix.get(x, y)));
        breakdown.runs += run_penalty(&line);
        breakdown.finder_like += finder_like_penalty(&line);
    }
    for x in 0..size {
        line.clear();
        line.extend((0..size).map(|y| matrix.get(x, y)));
        breakdown.runs += run_penalty(&line);
        breakdown.finder_like += finder_like_penalty(&line);
    }

    breakdown.blocks = block_penalty(matrix);
    breakdown.balance = balance_penalty(matrix);
    breakdown
}

fn run_penalty(line: &[bool]) -> u32 {
    let mut penalty = 0;
    let mut score_run = |run: usize| {
        if run >= 5 {
            penalty += PENALTY_RUN + (run - 5) as u32;
        }
    };

    let mut run = 1;
    for pair in line.windows(2) {
        if pair[0] == pair[1] {
            run += 1;
        } else {
            score_run(run);
            run = 1;
        }
    }
    if !line.is_empty() {
        score_run(run);
    }
    penalty
}

fn finder_like_penalty(line: &[bool]) -> u32 {
    line.windows(11)
        .map(|w| {
            let mut hits = 0;
            if w == &FINDER_THEN_LIGHT[..] {
                hits += PENALTY_FINDER_LIKE;
            }
            if w == &LIGHT_THEN_FINDER[..] {
                hits += PENALTY_FINDER_LIKE;
            }
            hits
        })
        .sum()
}

fn block_penalty(matrix: &BitMatrix) -> u32 {
    let mut penalty = 0;
    for y in 0..matrix.height().saturating_sub(1) {
        for x in 0..matrix.width().saturating_sub(1) {
            let c = matrix.get(x, y);
            if c == matrix.get(x + 1, y) && c == matrix.get(x, y + 1) && c == matrix.get(x + 1, y + 1)
            {
                penalty += PENALTY_BLOCK;
            }
        }
    }
    penalty
}

fn balance_penalty(matrix: &BitMatrix) -> u32 {
    let total = matrix.width() * matrix.height();
    if total == 0 {
        return 0;
    }
    let dark = matrix.count_ones();
    let percent = (dark * 100 + total / 2) / total;
    (percent.abs_diff(50) / 5) as u32 * PENALTY_BALANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix_from_rows(rows: &[&str]) -> BitMatrix {
        let mut m = BitMatrix::new(rows[0].len(), rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                m.set(x, y, c == '#');
            }
        }
        m
    }

    #[test]
    fn test_run_penalty() {
        assert_eq!(run_penalty(&[true; 4]), 0);
        assert_eq!(run_penalty(&[true; 5]), 3);
        assert_eq!(run_penalty(&[false; 7]), 5);
        let line = [true, true, true, true, true, false, false, false, false, false, false];
        assert_eq!(run_penalty(&line), 3 + 4);
    }

    #[test]
    fn test_finder_like_penalty() {
        assert_eq!(finder_like_penalty(&FINDER_THEN_LIGHT), 40);
        assert_eq!(finder_like_penalty(&LIGHT_THEN_FINDER), 40);

        // 0000 1011101 0000 matches both orientations
        let mut line = vec![false; 4];
        line.extend_from_slice(&FINDER_THEN_LIGHT);
        assert_eq!(finder_like_penalty(&line), 80);

        // Margin too short
        let line = [true, false, true, true, true, false, true, false, false, false];
        assert_eq!(finder_like_penalty(&line), 0);
    }

    #[test]
    fn test_block_penalty() {
        let m = matrix_from_rows(&["##..", "##..", "...."]);
        // One dark block, two light blocks
        assert_eq!(block_penalty(&m), 9);
    }

    #[test]
    fn test_balance_penalty() {
        let half = matrix_from_rows(&["#.", ".#"]);
        assert_eq!(balance_penalty(&half), 0);
        let all_light = BitMatrix::new(10, 10);
        assert_eq!(balance_penalty(&all_light), 100);
        // 44% dark -> |44-50| / 5 = 1
        let mut m = BitMatrix::new(10, 10);
        for i in 0..44 {
            m.set(i % 10, i / 10, true);
        }
        assert_eq!(balance_penalty(&m), 10);
    }

    #[test]
    fn test_checkerboard_scores_only_balance() {
        let mut m = BitMatrix::new(21, 21);
        for y in 0..21 {
            for x in 0..21 {
                m.set(x, y, (x + y) % 2 == 0);
            }
        }
        let breakdown = evaluate(&m);
        assert_eq!(breakdown.runs, 0);
        assert_eq!(breakdown.blocks, 0);
        assert_eq!(breakdown.finder_like, 0);
        // 221 of 441 dark rounds to 50%
        assert_eq!(breakdown.balance, 0);
        assert_eq!(score(&m), 0);
    }

    #[test]
    fn test_all_light_matrix() {
        let m = BitMatrix::new(21, 21);
        let breakdown = evaluate(&m);
        // 42 lines of length 21: 3 + 16 each
        assert_eq!(breakdown.runs, 42 * 19);
        assert_eq!(breakdown.blocks, 20 * 20 * 3);
        assert_eq!(breakdown.balance, 100);
        assert_eq!(breakdown.finder_like, 0);
    }
}
