//! Breadth first search

use crate::search::{
    search_engines::{graph_search, ExploredSet, FifoFrontier, SearchEngine, SearchOutcome},
    SearchError, SearchProblem,
};

#[derive(Debug, Default)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for BFS {
    fn search(
        &self,
        problem: &P,
    ) -> Result<SearchOutcome<P::State, P::Operator>, SearchError> {
        Ok(graph_search(
            problem,
            FifoFrontier::new(),
            ExploredSet::closed(),
            |_| 0,
            None,
        ))
    }
}
