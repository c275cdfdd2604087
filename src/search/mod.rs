mod error;
pub mod heuristics;
mod plan;
pub mod problem_formulations;
pub mod search_engines;
mod validate;
mod verbosity;

pub use error::{ConfigError, SearchError};
pub use heuristics::{Heuristic, HeuristicName, HeuristicValue};
pub use plan::Plan;
pub use problem_formulations::{DeliveryOperator, DeliveryProblem, SearchProblem};
pub use search_engines::{SearchEngine, SearchEngineName, SearchOutcome};
pub use validate::{validate, ValidationError};
pub use verbosity::Verbosity;
