use crate::delivery::{solve_with_options, PlanReport, SolveOptions};
use crate::search::{ConfigError, SearchEngineName};
use crate::world::{Agent, Grid, Position};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Serialize)]
pub struct AgentPlan {
    pub agent: Agent,
    pub goal: Position,
    pub report: PlanReport,
}

/// Send each agent, in order, to its nearest unclaimed destination.
///
/// Distance is Manhattan distance from the agent's position and the earliest
/// listed destination wins ties. Agents left over once every destination is
/// claimed get no plan.
pub fn plan_all(grid: &Grid, strategy: SearchEngineName) -> Result<Vec<AgentPlan>, ConfigError> {
    plan_all_with_options(grid, strategy, &SolveOptions::default())
}

pub fn plan_all_with_options(
    grid: &Grid,
    strategy: SearchEngineName,
    options: &SolveOptions,
) -> Result<Vec<AgentPlan>, ConfigError> {
    let mut remaining = grid.destinations().to_vec();
    let mut plans = Vec::with_capacity(grid.agents().len().min(remaining.len()));
    for agent in grid.agents() {
        let Some(index) = remaining
            .iter()
            .enumerate()
            .min_by_key(|(_, goal)| agent.position.manhattan_distance(goal))
            .map(|(index, _)| index)
        else {
            break;
        };
        let goal = remaining.remove(index);
        let report = solve_with_options(grid, agent.position, goal, strategy, options)?;
        info!(agent = %agent.id, %goal, result = %report.encoding());
        plans.push(AgentPlan {
            agent: agent.clone(),
            goal,
            report,
        });
    }
    Ok(plans)
}

/// Run every strategy from the first agent to the first destination.
pub fn compare_strategies(grid: &Grid) -> Result<Vec<PlanReport>, ConfigError> {
    compare_strategies_with_options(grid, &SolveOptions::default())
}

pub fn compare_strategies_with_options(
    grid: &Grid,
    options: &SolveOptions,
) -> Result<Vec<PlanReport>, ConfigError> {
    let (Some(agent), Some(&goal)) = (grid.agents().first(), grid.destinations().first()) else {
        return Ok(vec![]);
    };
    SearchEngineName::all()
        .map(|strategy| solve_with_options(grid, agent.position, goal, strategy, options))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::HeuristicName;
    use crate::test_utils::*;

    #[test]
    fn agents_take_nearest_destination() {
        let grid = Grid::from_text(SAMPLE_WORLD_TEXT).unwrap();
        let plans = plan_all(&grid, SearchEngineName::Ucs).unwrap();
        let assignments: Vec<(&str, Position)> = plans
            .iter()
            .map(|plan| (plan.agent.id.as_str(), plan.goal))
            .collect();
        assert_eq!(
            assignments,
            [("A1", Position::new(0, 3)), ("A2", Position::new(4, 4))]
        );
        assert!(plans.iter().all(|plan| plan.report.is_success()));
        assert_eq!(plans[0].report.cost, Some(3));
    }

    #[test]
    fn ties_go_to_the_first_destination() {
        let mut grid = uniform_grid(3, 1, 1);
        grid.add_destination(Position::new(0, 0)).unwrap();
        grid.add_destination(Position::new(2, 0)).unwrap();
        grid.add_agent(Agent::new("A1", Position::new(1, 0)))
            .unwrap();
        grid.add_agent(Agent::new("A2", Position::new(1, 0)))
            .unwrap();
        grid.add_agent(Agent::new("A3", Position::new(1, 0)))
            .unwrap();
        let plans = plan_all(&grid, SearchEngineName::Bfs).unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].goal, Position::new(0, 0));
        assert_eq!(plans[1].goal, Position::new(2, 0));
    }

    #[test]
    fn comparison_covers_every_strategy() {
        let grid = Grid::from_text(SAMPLE_WORLD_TEXT).unwrap();
        let reports = compare_strategies(&grid).unwrap();
        let strategies: Vec<SearchEngineName> =
            reports.iter().map(|report| report.strategy).collect();
        assert_eq!(strategies, SearchEngineName::all().collect::<Vec<_>>());
        assert!(reports.iter().all(|report| report.goal == Position::new(4, 4)));
        assert!(reports.iter().all(PlanReport::is_success));
    }

    #[test]
    fn options_reach_every_search() {
        let grid = Grid::from_text(SAMPLE_WORLD_TEXT).unwrap();
        let shallow = SolveOptions {
            max_depth: 1,
            heuristic: HeuristicName::ZeroHeuristic,
        };
        let plans = plan_all_with_options(&grid, SearchEngineName::Ids, &shallow).unwrap();
        assert_eq!(plans.len(), 2);
        assert!(plans.iter().all(|plan| !plan.report.is_success()));

        let reports = compare_strategies_with_options(&grid, &shallow).unwrap();
        let ids = &reports[3];
        assert_eq!(ids.strategy, SearchEngineName::Ids);
        assert!(!ids.is_success());
        let astar = &reports[5];
        assert_eq!(astar.strategy, SearchEngineName::AStar);
        assert_eq!(astar.cost, reports[2].cost);
    }

    #[test]
    fn comparison_without_agents_is_empty() {
        let mut grid = uniform_grid(2, 2, 1);
        grid.add_destination(Position::new(1, 1)).unwrap();
        assert!(compare_strategies(&grid).unwrap().is_empty());
    }
}
