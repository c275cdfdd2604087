//! Admissible distance estimate for the delivery grid.

use crate::search::{Heuristic, HeuristicValue};
use crate::world::{Cost, Grid, Position};

/// Manhattan distance to the goal, multiplied by a per-step lower bound.
///
/// Every ordinary move shifts the agent by one cell and costs at least the
/// grid's cheapest positive edge, so on tunnel-free grids the bound is that
/// cost (at least 1). A tunnel covers its Manhattan distance at one unit per
/// cell, so once the grid has tunnels the bound drops to 1.
#[derive(Debug, Clone)]
pub struct ManhattanHeuristic {
    goal: Position,
    step_lower_bound: Cost,
}

impl ManhattanHeuristic {
    pub fn new(grid: &Grid, goal: Position) -> Self {
        let step_lower_bound = if grid.tunnels().is_empty() {
            grid.min_positive_edge_cost().max(1)
        } else {
            1
        };
        Self {
            goal,
            step_lower_bound,
        }
    }

    pub fn step_lower_bound(&self) -> Cost {
        self.step_lower_bound
    }
}

impl Heuristic<Position> for ManhattanHeuristic {
    fn evaluate(&self, state: &Position) -> HeuristicValue {
        state
            .manhattan_distance(&self.goal)
            .saturating_mul(self.step_lower_bound)
    }
}
