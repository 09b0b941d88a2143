//! Smith-Waterman local alignment over arbitrary token sequences.
//!
//! The aligner works on any slice of [`Token`]s: bytes, characters, words or
//! the tokens of a log template. It returns the best-scoring local alignment
//! as two equal-length sequences padded with the token type's gap marker.
//!
//! ```
//! use sw_align::{align, ScoreParams};
//!
//! let s1: Vec<char> = "GGTTGACTA".chars().collect();
//! let s2: Vec<char> = "TGTTACGG".chars().collect();
//! let aln = align(&s1, &s2, &ScoreParams::new(3, -2, -3));
//!
//! assert_eq!(aln.aligned_seq1.iter().collect::<String>(), "GTTGAC");
//! assert_eq!(aln.aligned_seq2.iter().collect::<String>(), "GTT-AC");
//! assert_eq!(aln.score, 13);
//! ```

use log::{debug, trace, warn};
use thiserror::Error;

pub mod config;
pub mod matrix;
pub mod scoring;
pub mod token;
pub mod traceback;

pub use crate::config::AlignerConfig;
pub use crate::matrix::Matrix;
pub use crate::scoring::{identity, score, AlignmentStats, Position, ScoreParams};
pub use crate::token::Token;
pub use crate::traceback::{Alignment, Direction, TracebackOperation};

// Defaults expected by existing callers.
pub const DEFAULT_MATCH_SCORE: i32 = 10;
pub const DEFAULT_GAP_PENALTY: i32 = 0;
pub const DEFAULT_MISMATCH_PENALTY: i32 = 1;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlignerError {
    #[error("Alignment needs {cells} cells, limit is {limit}")]
    SequenceTooLarge { cells: usize, limit: usize },
    #[error("Identity of an empty alignment is undefined")]
    EmptyAlignment,
    #[error("Aligned sequences differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// Filled dynamic-programming tables of one alignment.
#[derive(Debug, Clone)]
pub struct DpTables {
    pub scores: Matrix<i32>,
    pub directions: Matrix<Direction>,
    pub best: Position,
    pub best_score: i32,
}

/// Fills the score and direction matrices for `s1` (rows) against `s2` (columns).
///
/// Scores are floored at zero. Among candidates equal to the cell's score the
/// direction prefers diagonal, then left, then up. The best cell is the last
/// maximum in row-major order.
pub fn fill<T: Token>(s1: &[T], s2: &[T], params: &ScoreParams) -> DpTables {
    let (m, n) = (s1.len(), s2.len());
    let mut scores = Matrix::new(m + 1, n + 1, 0i32);
    let mut directions = Matrix::new(m + 1, n + 1, Direction::None);
    let mut best = Position::default();
    let mut best_score = 0;

    for i in 1..=m {
        for j in 1..=n {
            let diagonal = scores
                .get(i - 1, j - 1)
                .saturating_add(score(&s1[i - 1], &s2[j - 1], params));
            let up = scores.get(i - 1, j).saturating_add(params.gap_penalty);
            let left = scores.get(i, j - 1).saturating_add(params.gap_penalty);
            let h = diagonal.max(up).max(left).max(0);

            // Later checks overwrite earlier ones on ties.
            let mut direction = Direction::None;
            if h > 0 {
                if up == h {
                    direction = Direction::Up;
                }
                if left == h {
                    direction = Direction::Left;
                }
                if diagonal == h {
                    direction = Direction::Diagonal;
                }
            }

            scores.set(i, j, h);
            directions.set(i, j, direction);

            if h >= best_score {
                best = Position::new(i, j);
                best_score = h;
            }
        }
    }

    DpTables {
        scores,
        directions,
        best,
        best_score,
    }
}

/// Best local alignment of `s1` and `s2`. Empty input gives an empty alignment.
///
/// Allocates two `(m + 1) * (n + 1)` tables with no size check; use
/// [`Aligner`] with [`AlignerConfig::with_max_cells`] to bound the work.
pub fn align<T: Token>(s1: &[T], s2: &[T], params: &ScoreParams) -> Alignment<T> {
    let tables = fill(s1, s2, params);
    trace!(
        "best cell ({}, {}) with score {}",
        tables.best.i,
        tables.best.j,
        tables.best_score
    );

    let alignment = traceback::traceback(
        &tables.directions,
        s1,
        s2,
        tables.best,
        tables.best_score,
    );
    trace!("traceback produced {} columns", alignment.len());
    alignment
}

/// Reusable aligner bound to one [`AlignerConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Aligner {
    config: AlignerConfig,
}

impl Aligner {
    pub fn new(config: AlignerConfig) -> Self {
        Self { config }
    }

    pub fn with_params(params: ScoreParams) -> Self {
        Self::new(AlignerConfig::new().with_params(params))
    }

    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    pub fn params(&self) -> &ScoreParams {
        &self.config.params
    }

    pub fn align<T: Token>(&self, s1: &[T], s2: &[T]) -> Result<Alignment<T>, AlignerError> {
        let cells = (s1.len() + 1).saturating_mul(s2.len() + 1);
        if let Some(limit) = self.config.max_cells {
            if cells > limit {
                warn!(
                    "Rejecting {}x{} alignment: {} cells over limit {}",
                    s1.len(),
                    s2.len(),
                    cells,
                    limit
                );
                return Err(AlignerError::SequenceTooLarge { cells, limit });
            }
        }

        debug!(
            "Aligning {}x{} tokens with {:?}",
            s1.len(),
            s2.len(),
            self.config.params
        );
        Ok(align(s1, s2, &self.config.params))
    }
}
