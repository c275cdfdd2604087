//! Uniform cost search

use crate::search::{
    search_engines::{graph_search, ExploredSet, PriorityFrontier, SearchEngine, SearchOutcome},
    SearchError, SearchProblem,
};

/// Expands the cheapest node first. A state is expanded again if it is
/// reached by a strictly cheaper path.
#[derive(Debug, Default)]
pub struct UCS {}

impl UCS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for UCS {
    fn search(
        &self,
        problem: &P,
    ) -> Result<SearchOutcome<P::State, P::Operator>, SearchError> {
        Ok(graph_search(
            problem,
            PriorityFrontier::new(),
            ExploredSet::best_cost(),
            |node| node.get_path_cost(),
            None,
        ))
    }
}
