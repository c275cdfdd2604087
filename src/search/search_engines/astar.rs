//! A* search

use crate::search::{
    search_engines::{
        graph_search, ExploredSet, PriorityFrontier, SearchEngine, SearchEngineName,
        SearchOutcome,
    },
    SearchError, SearchProblem,
};

/// Orders the frontier by `f = g + h`, re-expanding states on strictly
/// cheaper paths like UCS. Optimal whenever the heuristic is admissible.
#[derive(Debug, Default)]
pub struct AStar {}

impl AStar {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: SearchProblem> SearchEngine<P> for AStar {
    fn search(
        &self,
        problem: &P,
    ) -> Result<SearchOutcome<P::State, P::Operator>, SearchError> {
        let heuristic = problem
            .heuristic()
            .ok_or(SearchError::MissingHeuristic {
                engine: SearchEngineName::AStar,
            })?;
        Ok(graph_search(
            problem,
            PriorityFrontier::new(),
            ExploredSet::best_cost(),
            |node| {
                node.get_path_cost()
                    .saturating_add(heuristic.evaluate(node.get_state()))
            },
            None,
        ))
    }
}
