use crate::models::Cost;

/// Keeps objective values of a single run indexed by iteration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunHistory {
    /// Objective values of constructed solutions.
    pub initial: Vec<Cost>,
    /// Objective values after local search.
    pub improved: Vec<Cost>,
    /// Best objective value found so far.
    pub best: Vec<Cost>,
    /// Indices of alpha values used by iterations.
    pub alphas: Vec<usize>,
}

impl RunHistory {
    /// Creates a new instance of `RunHistory` with reserved capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            initial: Vec::with_capacity(capacity),
            improved: Vec::with_capacity(capacity),
            best: Vec::with_capacity(capacity),
            alphas: Vec::with_capacity(capacity),
        }
    }

    /// Records the next iteration.
    pub fn push(&mut self, alpha_idx: usize, initial: Cost, improved: Cost) {
        let best = self.best.last().map_or(improved, |&best| best.max(improved));

        self.initial.push(initial);
        self.improved.push(improved);
        self.best.push(best);
        self.alphas.push(alpha_idx);
    }

    /// Returns amount of recorded iterations.
    pub fn len(&self) -> usize {
        self.improved.len()
    }

    /// Returns true if no iteration is recorded.
    pub fn is_empty(&self) -> bool {
        self.improved.is_empty()
    }

    /// Returns the best objective value of the run.
    pub fn best_cost(&self) -> Option<Cost> {
        self.best.last().copied()
    }
}
