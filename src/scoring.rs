use crate::token::Token;
use crate::{AlignerError, DEFAULT_GAP_PENALTY, DEFAULT_MATCH_SCORE, DEFAULT_MISMATCH_PENALTY};

/// Linear scoring scheme. Every value is added to the running score as is,
/// so a "penalty" only lowers the score when it is negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreParams {
    pub match_score: i32,
    pub gap_penalty: i32,
    pub mismatch_penalty: i32,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            match_score: DEFAULT_MATCH_SCORE,
            gap_penalty: DEFAULT_GAP_PENALTY,
            mismatch_penalty: DEFAULT_MISMATCH_PENALTY,
        }
    }
}

impl ScoreParams {
    pub fn new(match_score: i32, gap_penalty: i32, mismatch_penalty: i32) -> Self {
        Self {
            match_score,
            gap_penalty,
            mismatch_penalty,
        }
    }

    pub fn with_match_score(mut self, match_score: i32) -> Self {
        self.match_score = match_score;
        self
    }

    pub fn with_gap_penalty(mut self, gap_penalty: i32) -> Self {
        self.gap_penalty = gap_penalty;
        self
    }

    pub fn with_mismatch_penalty(mut self, mismatch_penalty: i32) -> Self {
        self.mismatch_penalty = mismatch_penalty;
        self
    }
}

/// Substitution score for aligning `a` against `b`.
pub fn score<T: Token>(a: &T, b: &T, params: &ScoreParams) -> i32 {
    if a == b {
        params.match_score
    } else if a.is_gap() || b.is_gap() {
        params.gap_penalty
    } else {
        params.mismatch_penalty
    }
}

/// A cell of the dynamic-programming tables, `i` indexing the first sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub i: usize,
    pub j: usize,
}

impl Position {
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignmentStats {
    pub matches: usize,
    pub mismatches: usize,
    pub gaps: usize,
}

impl AlignmentStats {
    /// Counts column kinds over two aligned sequences.
    pub fn from_columns<T: Token>(align_s1: &[T], align_s2: &[T]) -> Self {
        align_s1
            .iter()
            .zip(align_s2)
            .fold(Self::default(), |mut acc, (a, b)| {
                if a == b {
                    acc.matches += 1;
                } else if a.is_gap() || b.is_gap() {
                    acc.gaps += 1;
                } else {
                    acc.mismatches += 1;
                }
                acc
            })
    }

    pub fn columns(&self) -> usize {
        self.matches + self.mismatches + self.gaps
    }
}

/// Percentage of columns where both aligned sequences carry the same token.
///
/// An empty alignment has no defined identity and is reported as
/// [`AlignerError::EmptyAlignment`] rather than NaN.
pub fn identity<T: PartialEq>(align_s1: &[T], align_s2: &[T]) -> Result<f64, AlignerError> {
    if align_s1.len() != align_s2.len() {
        return Err(AlignerError::LengthMismatch {
            left: align_s1.len(),
            right: align_s2.len(),
        });
    }
    if align_s1.is_empty() {
        return Err(AlignerError::EmptyAlignment);
    }

    let matches = align_s1
        .iter()
        .zip(align_s2)
        .filter(|(a, b)| a == b)
        .count();
    Ok(matches as f64 / align_s1.len() as f64 * 100.0)
}
