use crate::delivery::reconstruct_route;
use crate::search::{
    search_engines::DEFAULT_MAX_DEPTH, ConfigError, DeliveryOperator, DeliveryProblem,
    HeuristicName, Plan, SearchEngineName,
};
use crate::world::{Cost, Grid, Position};
use memory_stats::memory_stats;
use serde::Serialize;
use std::fmt::{self, Display};
use std::time::Instant;
use tracing::debug;

/// Knobs for a single query. The defaults are what the planner binary uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveOptions {
    pub max_depth: usize,
    pub heuristic: HeuristicName,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            heuristic: HeuristicName::default(),
        }
    }
}

/// The result of one query together with how long it took and how much
/// resident memory it added.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub strategy: SearchEngineName,
    pub start: Position,
    pub goal: Position,
    pub plan: Option<Plan<DeliveryOperator>>,
    pub cost: Option<Cost>,
    pub nodes_expanded: usize,
    /// Cells visited by the plan; just the start when there is no plan.
    pub route: Vec<Position>,
    pub elapsed_ms: f64,
    pub memory_delta_bytes: i64,
}

impl PlanReport {
    pub fn is_success(&self) -> bool {
        self.plan.is_some()
    }

    /// `<plan>;<cost>;<nodesExpanded>`, with `null;inf` on failure.
    pub fn encoding(&self) -> String {
        match (&self.plan, self.cost) {
            (Some(plan), Some(cost)) => format!("{};{};{}", plan, cost, self.nodes_expanded),
            _ => format!("null;inf;{}", self.nodes_expanded),
        }
    }
}

impl Display for PlanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|time_ms={:.3},mem_bytes={}",
            self.encoding(),
            self.elapsed_ms,
            self.memory_delta_bytes
        )
    }
}

fn resident_bytes() -> i64 {
    memory_stats().map_or(0, |usage| usage.physical_mem as i64)
}

pub fn solve(
    grid: &Grid,
    start: Position,
    goal: Position,
    strategy: SearchEngineName,
) -> Result<PlanReport, ConfigError> {
    solve_with_options(grid, start, goal, strategy, &SolveOptions::default())
}

/// Like [`solve`], but the strategy is given by its textual identifier.
pub fn solve_by_name(
    grid: &Grid,
    start: Position,
    goal: Position,
    strategy: &str,
) -> Result<PlanReport, ConfigError> {
    let strategy = SearchEngineName::from_name(strategy)?;
    solve(grid, start, goal, strategy)
}

pub fn solve_with_options(
    grid: &Grid,
    start: Position,
    goal: Position,
    strategy: SearchEngineName,
    options: &SolveOptions,
) -> Result<PlanReport, ConfigError> {
    let problem = DeliveryProblem::new(grid, start, goal)?
        .with_heuristic(options.heuristic.create(grid, goal));

    let memory_before = resident_bytes();
    let timer = Instant::now();
    let outcome = strategy.search_with_max_depth(&problem, options.max_depth)?;
    let elapsed = timer.elapsed();
    let memory_delta_bytes = resident_bytes() - memory_before;
    debug!(%strategy, %start, %goal, elapsed = %humantime::format_duration(elapsed));

    let plan = outcome.plan();
    Ok(PlanReport {
        strategy,
        start,
        goal,
        route: plan
            .as_ref()
            .map_or_else(|| vec![start], |plan| reconstruct_route(start, plan, grid)),
        plan,
        cost: outcome.cost(),
        nodes_expanded: outcome.nodes_expanded(),
        elapsed_ms: elapsed.as_secs_f64() * 1000.0,
        memory_delta_bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn solve_straight_corridor() {
        let grid = Grid::from_text(SCENARIO_A_WORLD_TEXT).unwrap();
        let report = solve(
            &grid,
            Position::new(0, 0),
            Position::new(2, 0),
            SearchEngineName::Ucs,
        )
        .unwrap();
        assert!(report.is_success());
        assert!(report.encoding().starts_with("right,right;2;"));
        assert_eq!(
            report.route,
            [(0, 0), (1, 0), (2, 0)].map(Position::from).to_vec()
        );
        let line = report.to_string();
        assert!(line.starts_with(&report.encoding()));
        assert!(line.contains("|time_ms="));
        assert!(line.contains(",mem_bytes="));
    }

    #[test]
    fn unknown_strategy_is_rejected_before_searching() {
        let grid = Grid::from_text(SCENARIO_A_WORLD_TEXT).unwrap();
        let result = solve_by_name(&grid, Position::new(0, 0), Position::new(2, 0), "ZIGZAG");
        assert!(matches!(result, Err(ConfigError::UnknownStrategy(_))));
    }

    #[test]
    fn failure_report() {
        let grid = Grid::from_text(UNREACHABLE_GOAL_WORLD_TEXT).unwrap();
        let report = solve_by_name(&grid, Position::new(0, 0), Position::new(2, 0), "bfs")
            .unwrap();
        assert!(!report.is_success());
        assert_eq!(report.encoding(), "null;inf;2");
        assert_eq!(report.route, vec![Position::new(0, 0)]);
    }

    #[test]
    fn out_of_bounds_goal_is_a_configuration_error() {
        let grid = uniform_grid(2, 2, 1);
        let result = solve(
            &grid,
            Position::new(0, 0),
            Position::new(5, 5),
            SearchEngineName::Bfs,
        );
        assert!(matches!(result, Err(ConfigError::OutOfBounds { .. })));
    }

    #[test]
    fn options_are_honoured() {
        let grid = Grid::from_text(CHEAP_DETOUR_WORLD_TEXT).unwrap();
        let shallow = SolveOptions {
            max_depth: 1,
            ..SolveOptions::default()
        };
        let report = solve_with_options(
            &grid,
            Position::new(0, 0),
            Position::new(2, 0),
            SearchEngineName::Ids,
            &shallow,
        )
        .unwrap();
        assert!(!report.is_success());

        let zero = SolveOptions {
            heuristic: HeuristicName::ZeroHeuristic,
            ..SolveOptions::default()
        };
        let report = solve_with_options(
            &grid,
            Position::new(0, 0),
            Position::new(2, 0),
            SearchEngineName::AStar,
            &zero,
        )
        .unwrap();
        assert_eq!(report.cost, Some(4));
    }

    #[test]
    fn report_serialises_to_json() {
        let grid = Grid::from_text(SCENARIO_A_WORLD_TEXT).unwrap();
        let report = solve(
            &grid,
            Position::new(0, 0),
            Position::new(2, 0),
            SearchEngineName::AStar,
        )
        .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["strategy"], "ASTAR");
        assert_eq!(json["plan"], serde_json::json!(["right", "right"]));
        assert_eq!(json["cost"], 2);
    }
}
