mod astar;
mod bfs;
mod dfs;
mod explored;
mod frontier;
mod gbfs;
mod graph_search;
mod ids;
mod search_engine;
mod search_node;
mod search_outcome;
mod search_space;
mod search_statistics;
mod ucs;

pub use astar::AStar;
pub use bfs::BFS;
pub use dfs::DFS;
pub use explored::{Admission, ExploredSet};
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
pub use gbfs::GBFS;
pub use ids::{IDS, DEFAULT_MAX_DEPTH};
pub use search_engine::{SearchEngine, SearchEngineName};
pub use search_node::{NodeId, SearchNode};
pub use search_outcome::SearchOutcome;
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use ucs::UCS;

pub(crate) use graph_search::graph_search;
