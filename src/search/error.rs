use crate::search::SearchEngineName;
use crate::world::{Position, WorldError};

/// Problems with the request itself. Raised before any search starts.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown search strategy `{0}`, expected one of BFS, DFS, UCS, IDS, GREEDY, ASTAR")]
    UnknownStrategy(String),
    #[error("{role} position {position} is outside the {width}x{height} grid")]
    OutOfBounds {
        role: &'static str,
        position: Position,
        width: i32,
        height: i32,
    },
    #[error(transparent)]
    World(#[from] WorldError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// A strategy was asked to run on a problem it cannot handle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("{engine} needs a heuristic but the problem does not provide one")]
    MissingHeuristic { engine: SearchEngineName },
}
