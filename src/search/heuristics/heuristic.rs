use crate::search::heuristics::{ManhattanHeuristic, ZeroHeuristic};
use crate::world::{Cost, Grid, Position};
use std::fmt::Debug;

pub type HeuristicValue = Cost;

/// An estimate of the remaining cost from a state to the goal. Attached to a
/// problem as a capability so that informed strategies stay domain-agnostic.
pub trait Heuristic<T>: Debug {
    /// Evaluate the given state.
    fn evaluate(&self, state: &T) -> HeuristicValue;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[default]
    #[clap(help = "Manhattan distance scaled by the cheapest street, admissible.")]
    Manhattan,
    #[clap(name = "zero", help = "The zero heuristic, turns A* into UCS.")]
    ZeroHeuristic,
}

impl HeuristicName {
    pub fn create(&self, grid: &Grid, goal: Position) -> Box<dyn Heuristic<Position>> {
        match self {
            HeuristicName::Manhattan => Box::new(ManhattanHeuristic::new(grid, goal)),
            HeuristicName::ZeroHeuristic => Box::new(ZeroHeuristic::new()),
        }
    }
}
