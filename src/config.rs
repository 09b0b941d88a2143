use crate::scoring::ScoreParams;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignerConfig {
    pub params: ScoreParams,
    /// Upper bound on `(m + 1) * (n + 1)` table cells per call. `None` means unbounded.
    pub max_cells: Option<usize>,
}

impl AlignerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(mut self, params: ScoreParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = Some(max_cells);
        self
    }
}
