use crate::search::heuristics::ManhattanHeuristic;
use crate::search::{ConfigError, Heuristic, SearchProblem};
use crate::world::{tunnel_cost, Cost, Grid, Position, UNREACHABLE_COST};
use serde::Serialize;
use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};

/// Moves available to a delivery agent. `Up` decreases `y`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryOperator {
    Up,
    Down,
    Left,
    Right,
    Tunnel,
}

/// Operators in expansion order.
pub const DELIVERY_OPERATORS: [DeliveryOperator; 5] = [
    DeliveryOperator::Up,
    DeliveryOperator::Down,
    DeliveryOperator::Left,
    DeliveryOperator::Right,
    DeliveryOperator::Tunnel,
];

impl DeliveryOperator {
    /// Cell offset of a directional move; `None` for tunnels.
    pub fn offset(&self) -> Option<(i32, i32)> {
        match self {
            DeliveryOperator::Up => Some((0, -1)),
            DeliveryOperator::Down => Some((0, 1)),
            DeliveryOperator::Left => Some((-1, 0)),
            DeliveryOperator::Right => Some((1, 0)),
            DeliveryOperator::Tunnel => None,
        }
    }
}

/// Route a single agent from `start` to `goal` across a [`Grid`].
pub struct DeliveryProblem<'g> {
    grid: &'g Grid,
    start: Position,
    goal: Position,
    heuristic: Option<Box<dyn Heuristic<Position>>>,
}

impl<'g> DeliveryProblem<'g> {
    /// Construct a delivery problem with the admissible Manhattan heuristic
    /// attached. Both endpoints must lie on the grid.
    pub fn new(grid: &'g Grid, start: Position, goal: Position) -> Result<Self, ConfigError> {
        for (role, position) in [("start", start), ("goal", goal)] {
            if !grid.in_bounds(&position) {
                return Err(ConfigError::OutOfBounds {
                    role,
                    position,
                    width: grid.width(),
                    height: grid.height(),
                });
            }
        }
        Ok(Self {
            grid,
            start,
            goal,
            heuristic: Some(Box::new(ManhattanHeuristic::new(grid, goal))),
        })
    }

    pub fn with_heuristic(mut self, heuristic: Box<dyn Heuristic<Position>>) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    pub fn without_heuristic(mut self) -> Self {
        self.heuristic = None;
        self
    }

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn goal(&self) -> Position {
        self.goal
    }

    /// The neighbouring cell for a directional move, if it is on the grid and
    /// joined to `state` by an open street.
    fn step(&self, state: &Position, dx: i32, dy: i32) -> Option<Position> {
        let next = state.offset(dx, dy)?;
        if !self.grid.in_bounds(&next) {
            return None;
        }
        match self.grid.edge_cost(state, &next) {
            Some(cost) if cost > 0 => Some(next),
            _ => None,
        }
    }
}

impl fmt::Debug for DeliveryProblem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliveryProblem")
            .field("start", &self.start)
            .field("goal", &self.goal)
            .field("heuristic", &self.heuristic)
            .finish_non_exhaustive()
    }
}

impl SearchProblem for DeliveryProblem<'_> {
    type State = Position;
    type Operator = DeliveryOperator;

    fn initial_state(&self) -> Position {
        self.start
    }

    fn is_goal(&self, state: &Position) -> bool {
        *state == self.goal
    }

    fn operators(&self) -> &[DeliveryOperator] {
        &DELIVERY_OPERATORS
    }

    fn apply(&self, state: &Position, operator: DeliveryOperator) -> Option<Position> {
        match operator.offset() {
            Some((dx, dy)) => self.step(state, dx, dy),
            // Tunnels ignore streets entirely.
            None => self.grid.tunnel_partner(state),
        }
    }

    fn step_cost(&self, state: &Position, operator: DeliveryOperator) -> Cost {
        match operator.offset() {
            Some((dx, dy)) => self
                .step(state, dx, dy)
                .and_then(|next| self.grid.edge_cost(state, &next))
                .unwrap_or(UNREACHABLE_COST),
            None => self
                .grid
                .tunnel_partner(state)
                .map_or(UNREACHABLE_COST, |partner| tunnel_cost(state, &partner)),
        }
    }

    fn heuristic(&self) -> Option<&dyn Heuristic<Position>> {
        self.heuristic.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::heuristics::ZeroHeuristic;
    use crate::test_utils::*;
    use strum::IntoEnumIterator;

    #[test]
    fn operators_keep_fixed_order() {
        let grid = uniform_grid(2, 2, 1);
        let problem = DeliveryProblem::new(&grid, Position::new(0, 0), Position::new(1, 1))
            .unwrap();
        let labels: Vec<String> = problem.operators().iter().map(|o| o.to_string()).collect();
        assert_eq!(labels, ["up", "down", "left", "right", "tunnel"]);
        assert!(DeliveryOperator::iter().eq(DELIVERY_OPERATORS));
    }

    #[test]
    fn apply_rejects_out_of_bounds_blocked_and_missing_edges() {
        let grid = Grid::from_text(BLOCKED_DETOUR_WORLD_TEXT).unwrap();
        let problem = DeliveryProblem::new(&grid, Position::new(0, 0), Position::new(2, 0))
            .unwrap();
        let origin = Position::new(0, 0);
        assert_eq!(problem.apply(&origin, DeliveryOperator::Up), None);
        assert_eq!(problem.apply(&origin, DeliveryOperator::Left), None);
        // blocked
        assert_eq!(problem.apply(&origin, DeliveryOperator::Right), None);
        assert_eq!(
            problem.apply(&origin, DeliveryOperator::Down),
            Some(Position::new(0, 1))
        );
        // no edge recorded between (2,0) and (2,1)
        assert_eq!(
            problem.apply(&Position::new(2, 0), DeliveryOperator::Down),
            None
        );
        assert_eq!(problem.apply(&origin, DeliveryOperator::Tunnel), None);
        assert_eq!(
            problem.step_cost(&origin, DeliveryOperator::Right),
            UNREACHABLE_COST
        );
        assert_eq!(
            problem.step_cost(&origin, DeliveryOperator::Tunnel),
            UNREACHABLE_COST
        );
    }

    #[test]
    fn directional_moves_respect_edge_direction() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.set_edge(Position::new(0, 0), Position::new(1, 0), 4);
        let problem = DeliveryProblem::new(&grid, Position::new(0, 0), Position::new(1, 0))
            .unwrap();
        assert_eq!(
            problem.apply(&Position::new(0, 0), DeliveryOperator::Right),
            Some(Position::new(1, 0))
        );
        assert_eq!(
            problem.step_cost(&Position::new(0, 0), DeliveryOperator::Right),
            4
        );
        assert_eq!(
            problem.apply(&Position::new(1, 0), DeliveryOperator::Left),
            None
        );
    }

    #[test]
    fn tunnel_bypasses_streets() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.add_tunnel(Position::new(0, 0), Position::new(4, 4))
            .unwrap();
        let problem = DeliveryProblem::new(&grid, Position::new(4, 4), Position::new(0, 0))
            .unwrap();
        let far = Position::new(4, 4);
        assert_eq!(
            problem.apply(&far, DeliveryOperator::Tunnel),
            Some(Position::new(0, 0))
        );
        assert_eq!(problem.step_cost(&far, DeliveryOperator::Tunnel), 8);
    }

    #[test]
    fn directional_cost_ignores_adjacent_tunnel() {
        let mut grid = Grid::new(2, 1).unwrap();
        grid.set_undirected_edge(Position::new(0, 0), Position::new(1, 0), 9);
        grid.add_tunnel(Position::new(0, 0), Position::new(1, 0))
            .unwrap();
        let problem = DeliveryProblem::new(&grid, Position::new(0, 0), Position::new(1, 0))
            .unwrap();
        let origin = Position::new(0, 0);
        assert_eq!(problem.step_cost(&origin, DeliveryOperator::Right), 9);
        assert_eq!(problem.step_cost(&origin, DeliveryOperator::Tunnel), 1);
    }

    #[test]
    fn endpoints_must_be_on_grid() {
        let grid = uniform_grid(2, 2, 1);
        let result = DeliveryProblem::new(&grid, Position::new(0, 0), Position::new(2, 2));
        assert!(matches!(
            result,
            Err(ConfigError::OutOfBounds { role: "goal", .. })
        ));
        let result = DeliveryProblem::new(&grid, Position::new(-1, 0), Position::new(1, 1));
        assert!(matches!(
            result,
            Err(ConfigError::OutOfBounds { role: "start", .. })
        ));
    }

    #[test]
    fn heuristic_can_be_replaced_or_removed() {
        let grid = uniform_grid(3, 3, 2);
        let goal = Position::new(2, 2);
        let problem = DeliveryProblem::new(&grid, Position::new(0, 0), goal).unwrap();
        let h = problem.heuristic().unwrap();
        assert_eq!(h.evaluate(&Position::new(0, 0)), 8);

        let problem = problem.with_heuristic(Box::new(ZeroHeuristic::new()));
        assert_eq!(
            problem.heuristic().unwrap().evaluate(&Position::new(0, 0)),
            0
        );
        assert!(problem.without_heuristic().heuristic().is_none());
    }
}
