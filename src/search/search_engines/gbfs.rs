//! This module implements the greedy best-first search algorithm.

use crate::search::{
    search_engines::{
        graph_search, ExploredSet, PriorityFrontier, SearchEngine, SearchEngineName,
        SearchOutcome,
    },
    SearchError, SearchProblem,
};

/// Greedy best-first search: orders the frontier by the heuristic alone.
#[derive(Debug, Default)]
pub struct GBFS {}

impl GBFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for GBFS {
    fn search(
        &self,
        problem: &P,
    ) -> Result<SearchOutcome<P::State, P::Operator>, SearchError> {
        let heuristic = problem
            .heuristic()
            .ok_or(SearchError::MissingHeuristic {
                engine: SearchEngineName::Greedy,
            })?;
        Ok(graph_search(
            problem,
            PriorityFrontier::new(),
            ExploredSet::closed(),
            |node| heuristic.evaluate(node.get_state()),
            None,
        ))
    }
}
