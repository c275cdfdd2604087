use crate::world::{Cost, Grid, Position};

pub const SAMPLE_WORLD_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/worlds/sample.world"));

pub const SCENARIO_A_WORLD_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/worlds/scenario_a.world"));

pub const BLOCKED_DETOUR_WORLD_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/worlds/blocked_detour.world"
));

pub const UNREACHABLE_GOAL_WORLD_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/worlds/unreachable_goal.world"
));

pub const CHEAP_DETOUR_WORLD_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/worlds/cheap_detour.world"
));

/// A fully connected `width` x `height` grid where every street costs `cost`
/// in both directions.
pub fn uniform_grid(width: i32, height: i32, cost: Cost) -> Grid {
    let mut grid = Grid::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            let here = Position::new(x, y);
            if x + 1 < width {
                grid.set_undirected_edge(here, Position::new(x + 1, y), cost);
            }
            if y + 1 < height {
                grid.set_undirected_edge(here, Position::new(x, y + 1), cost);
            }
        }
    }
    grid
}

pub const LOOP_BEFORE_CORRIDOR_WORLD_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/worlds/loop_before_corridor.world"
));
