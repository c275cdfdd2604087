mod delivery_problem;
mod search_problem;

pub use delivery_problem::{DeliveryOperator, DeliveryProblem, DELIVERY_OPERATORS};
pub use search_problem::SearchProblem;
