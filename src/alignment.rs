//! Local alignment of numeral forms
//!
//! A small Smith-Waterman aligner over characters plus the shared-stem
//! measure built on top of it.
//!
//! `common_substring` is NOT the longest common substring. It aligns the two
//! strings locally, then walks the aligned pair from the left: nothing is
//! counted until the first column where both characters agree, and counting
//! stops at the first disagreeing column after that. The result is the
//! length of the first matching block, a cheap approximation of a shared
//! stem or morpheme.

use serde::{Deserialize, Serialize};

/// Scoring parameters for the local alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignmentParams {
    /// Reward for identical characters
    pub match_score: i32,
    /// Penalty for substituted characters (negative)
    pub mismatch: i32,
    /// Penalty for a gap column (negative)
    pub gap: i32,
}

impl Default for AlignmentParams {
    fn default() -> Self {
        Self {
            match_score: 1,
            mismatch: -1,
            gap: -1,
        }
    }
}

/// The locally aligned parts of two sequences. `None` marks a gap.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocalAlignment {
    pub a: Vec<Option<char>>,
    pub b: Vec<Option<char>>,
    pub score: i32,
}

impl LocalAlignment {
    /// Render one aligned row, gaps as '-'
    fn row(cells: &[Option<char>]) -> String {
        cells.iter().map(|c| c.unwrap_or('-')).collect()
    }

    pub fn render_a(&self) -> String {
        Self::row(&self.a)
    }

    pub fn render_b(&self) -> String {
        Self::row(&self.b)
    }

    /// Length of the first contiguous block of identical columns
    pub fn first_matching_run(&self) -> usize {
        let mut started = false;
        let mut run = 0;
        for (x, y) in self.a.iter().zip(&self.b) {
            if x == y {
                started = true;
                run += 1;
            } else if started {
                break;
            }
        }
        run
    }
}

/// Smith-Waterman local alignment
pub fn sw_align(seq_a: &str, seq_b: &str, params: &AlignmentParams) -> LocalAlignment {
    let a: Vec<char> = seq_a.chars().collect();
    let b: Vec<char> = seq_b.chars().collect();
    let (n, m) = (a.len(), b.len());
    if n == 0 || m == 0 {
        return LocalAlignment::default();
    }

    let substitution = |x: char, y: char| {
        if x == y {
            params.match_score
        } else {
            params.mismatch
        }
    };

    let width = m + 1;
    let mut matrix = vec![0i32; (n + 1) * width];
    let (mut best, mut best_i, mut best_j) = (0, 0, 0);

    for i in 1..=n {
        for j in 1..=m {
            let diagonal = matrix[(i - 1) * width + j - 1] + substitution(a[i - 1], b[j - 1]);
            let up = matrix[(i - 1) * width + j] + params.gap;
            let left = matrix[i * width + j - 1] + params.gap;
            let cell = diagonal.max(up).max(left).max(0);
            matrix[i * width + j] = cell;
            // first maximum in row-major order wins
            if cell > best {
                best = cell;
                best_i = i;
                best_j = j;
            }
        }
    }

    let mut alm_a = Vec::new();
    let mut alm_b = Vec::new();
    let (mut i, mut j) = (best_i, best_j);
    while i > 0 && j > 0 && matrix[i * width + j] > 0 {
        let cell = matrix[i * width + j];
        if cell == matrix[(i - 1) * width + j - 1] + substitution(a[i - 1], b[j - 1]) {
            alm_a.push(Some(a[i - 1]));
            alm_b.push(Some(b[j - 1]));
            i -= 1;
            j -= 1;
        } else if cell == matrix[(i - 1) * width + j] + params.gap {
            alm_a.push(Some(a[i - 1]));
            alm_b.push(None);
            i -= 1;
        } else {
            alm_a.push(None);
            alm_b.push(Some(b[j - 1]));
            j -= 1;
        }
    }
    alm_a.reverse();
    alm_b.reverse();

    LocalAlignment {
        a: alm_a,
        b: alm_b,
        score: best,
    }
}

/// Shared stem length of two strings under the default parameters
pub fn common_substring(seq_a: &str, seq_b: &str) -> usize {
    sw_align(seq_a, seq_b, &AlignmentParams::default()).first_matching_run()
}
