//! Delivery planning on top of the search engines: single queries, greedy
//! multi-agent assignment, strategy comparison and route display.

mod planner;
mod route;
mod solver;

pub use planner::{
    compare_strategies, compare_strategies_with_options, plan_all, plan_all_with_options,
    AgentPlan,
};
pub use route::reconstruct_route;
pub use solver::{solve, solve_by_name, solve_with_options, PlanReport, SolveOptions};
