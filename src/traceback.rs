use crate::matrix::Matrix;
use crate::scoring::{identity, AlignmentStats, Position};
use crate::token::Token;
use crate::AlignerError;

/// Predecessor of a cell in the score matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Local alignment starts here.
    #[default]
    None,
    /// Deletion: a token of the first sequence against a gap.
    Up,
    /// Insertion: a gap against a token of the second sequence.
    Left,
    Diagonal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracebackOperation {
    Match,
    Mismatch,
    Insertion,
    Deletion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment<T> {
    pub score: i32,
    pub aligned_seq1: Vec<T>,
    pub aligned_seq2: Vec<T>,
    pub operations: Vec<TracebackOperation>,
    /// Cell where the traceback stopped.
    pub start_position: Position,
    /// Highest-scoring cell, where the traceback began.
    pub end_position: Position,
}

impl<T: Token> Alignment<T> {
    pub fn len(&self) -> usize {
        self.aligned_seq1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_seq1.is_empty()
    }

    pub fn identity(&self) -> Result<f64, AlignerError> {
        identity(&self.aligned_seq1, &self.aligned_seq2)
    }

    pub fn stats(&self) -> AlignmentStats {
        AlignmentStats::from_columns(&self.aligned_seq1, &self.aligned_seq2)
    }
}

/// Walks `directions` backwards from `end` until a [`Direction::None`] cell.
pub fn traceback<T: Token>(
    directions: &Matrix<Direction>,
    s1: &[T],
    s2: &[T],
    end: Position,
    score: i32,
) -> Alignment<T> {
    let mut aligned_seq1 = Vec::new();
    let mut aligned_seq2 = Vec::new();
    let mut operations = Vec::new();

    let mut current = end;
    loop {
        match directions.at(current) {
            Direction::None => break,
            Direction::Diagonal => {
                let a = &s1[current.i - 1];
                let b = &s2[current.j - 1];
                operations.push(if a == b {
                    TracebackOperation::Match
                } else {
                    TracebackOperation::Mismatch
                });
                aligned_seq1.push(a.clone());
                aligned_seq2.push(b.clone());
                current.i -= 1;
                current.j -= 1;
            }
            Direction::Left => {
                aligned_seq1.push(T::gap());
                aligned_seq2.push(s2[current.j - 1].clone());
                operations.push(TracebackOperation::Insertion);
                current.j -= 1;
            }
            Direction::Up => {
                aligned_seq1.push(s1[current.i - 1].clone());
                aligned_seq2.push(T::gap());
                operations.push(TracebackOperation::Deletion);
                current.i -= 1;
            }
        }
    }

    // Built from the end backwards.
    aligned_seq1.reverse();
    aligned_seq2.reverse();
    operations.reverse();

    Alignment {
        score,
        aligned_seq1,
        aligned_seq2,
        operations,
        start_position: current,
        end_position: end,
    }
}
