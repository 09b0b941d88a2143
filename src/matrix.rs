use crate::scoring::Position;

/// Dense row-major table stored in a single allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Clone> Matrix<T> {
    /// Panics if `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize, fill: T) -> Self {
        let cells = rows
            .checked_mul(cols)
            .expect("matrix dimensions overflow usize");
        Self {
            data: vec![fill; cells],
            rows,
            cols,
        }
    }
}

impl<T: Copy> Matrix<T> {
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[self.index(row, col)]
    }

    #[inline]
    pub fn at(&self, pos: Position) -> T {
        self.get(pos.i, pos.j)
    }
}

impl<T> Matrix<T> {
    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let idx = self.index(row, col);
        self.data[idx] = value;
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cells in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn row(&self, row: usize) -> &[T] {
        let start = self.index(row, 0);
        &self.data[start..start + self.cols]
    }
}
