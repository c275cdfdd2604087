//! The static grid world that delivery agents move through.

mod agent;
mod error;
mod grid;
mod position;

pub use agent::Agent;
pub use error::WorldError;
pub use grid::{Cost, Grid, UNREACHABLE_COST};
pub(crate) use grid::tunnel_cost;
pub use position::Position;
