//! Depth first search

use crate::search::{
    search_engines::{graph_search, ExploredSet, LifoFrontier, SearchEngine, SearchOutcome},
    SearchError, SearchProblem,
};

/// Graph-search DFS: each state is expanded at most once, children are tried
/// in operator order.
#[derive(Debug, Default)]
pub struct DFS {}

impl DFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for DFS {
    fn search(
        &self,
        problem: &P,
    ) -> Result<SearchOutcome<P::State, P::Operator>, SearchError> {
        Ok(graph_search(
            problem,
            LifoFrontier::new(),
            ExploredSet::closed(),
            |_| 0,
            None,
        ))
    }
}
