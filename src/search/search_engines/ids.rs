//! Iterative deepening search

use crate::search::{
    search_engines::{graph_search, ExploredSet, LifoFrontier, SearchEngine, SearchOutcome},
    SearchError, SearchProblem,
};
use tracing::debug;

/// Deepest limit tried when none is given.
pub const DEFAULT_MAX_DEPTH: usize = 50;

/// Depth-limited DFS run for limits `0, 1, ..., max_depth`. Every limit starts
/// from scratch; the reported expansion count belongs to the last limit run.
///
/// Within one limit a state is expanded again when reached at a smaller
/// depth, so the first limit that admits a solution finds one and the plan
/// has the fewest actions of any plan.
#[derive(Debug)]
pub struct IDS {
    max_depth: usize,
}

impl IDS {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for IDS {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl<P: SearchProblem> SearchEngine<P> for IDS {
    fn search(
        &self,
        problem: &P,
    ) -> Result<SearchOutcome<P::State, P::Operator>, SearchError> {
        let mut outcome = SearchOutcome::failure(0);
        for limit in 0..=self.max_depth {
            outcome = graph_search(
                problem,
                LifoFrontier::new(),
                ExploredSet::best_depth(),
                |_| 0,
                Some(limit),
            );
            debug!(
                limit,
                solved = outcome.is_success(),
                nodes_expanded = outcome.nodes_expanded()
            );
            if outcome.is_success() {
                break;
            }
        }
        Ok(outcome)
    }
}
