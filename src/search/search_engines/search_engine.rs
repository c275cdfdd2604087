use crate::search::{
    search_engines::{AStar, SearchOutcome, BFS, DEFAULT_MAX_DEPTH, DFS, GBFS, IDS, UCS},
    ConfigError, SearchError, SearchProblem,
};
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::info;

pub trait SearchEngine<P: SearchProblem> {
    fn search(
        &self,
        problem: &P,
    ) -> Result<SearchOutcome<P::State, P::Operator>, SearchError>;
}

/// The strategies a caller can ask for, by their public identifiers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum SearchEngineName {
    Bfs,
    Dfs,
    Ucs,
    Ids,
    Greedy,
    #[strum(serialize = "ASTAR")]
    #[serde(rename = "ASTAR")]
    AStar,
}

impl SearchEngineName {
    /// Look a strategy up by identifier, ignoring case.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        name.trim()
            .parse()
            .map_err(|_| ConfigError::UnknownStrategy(name.to_string()))
    }

    /// All strategies, in the order they are listed in comparisons.
    pub fn all() -> impl Iterator<Item = SearchEngineName> {
        SearchEngineName::iter()
    }

    /// Whether the strategy needs the problem to provide a heuristic.
    pub fn is_informed(&self) -> bool {
        matches!(self, SearchEngineName::Greedy | SearchEngineName::AStar)
    }

    pub fn search<P: SearchProblem>(
        &self,
        problem: &P,
    ) -> Result<SearchOutcome<P::State, P::Operator>, SearchError> {
        self.search_with_max_depth(problem, DEFAULT_MAX_DEPTH)
    }

    /// As [`SearchEngineName::search`], with a custom depth ceiling for IDS.
    /// Other strategies ignore `max_depth`.
    pub fn search_with_max_depth<P: SearchProblem>(
        &self,
        problem: &P,
        max_depth: usize,
    ) -> Result<SearchOutcome<P::State, P::Operator>, SearchError> {
        let outcome = match self {
            SearchEngineName::Bfs => BFS::new().search(problem),
            SearchEngineName::Dfs => DFS::new().search(problem),
            SearchEngineName::Ucs => UCS::new().search(problem),
            SearchEngineName::Ids => IDS::new(max_depth).search(problem),
            SearchEngineName::Greedy => GBFS::new().search(problem),
            SearchEngineName::AStar => AStar::new().search(problem),
        }?;
        info!(
            strategy = %self,
            solved = outcome.is_success(),
            cost = ?outcome.cost(),
            nodes_expanded = outcome.nodes_expanded(),
        );
        Ok(outcome)
    }
}
