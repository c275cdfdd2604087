use crate::search::{DeliveryOperator, Plan};
use crate::world::{Grid, Position};

/// Positions visited when replaying `plan` from `start`, `start` included.
///
/// Directional moves shift the coordinates without consulting the streets. A
/// tunnel move from a cell without a tunnel leaves the agent where it is.
pub fn reconstruct_route(
    start: Position,
    plan: &Plan<DeliveryOperator>,
    grid: &Grid,
) -> Vec<Position> {
    let mut route = Vec::with_capacity(plan.len() + 1);
    let mut current = start;
    route.push(current);
    for operator in plan.steps() {
        current = match operator.offset() {
            Some((dx, dy)) => current.offset(dx, dy).unwrap_or(current),
            None => grid.tunnel_partner(&current).unwrap_or(current),
        };
        route.push(current);
    }
    route
}
