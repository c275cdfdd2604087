//! Contains the [`Directive`] type, a single line of a world description.

use crate::world::{Cost, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `GRID <width> <height>`
    Grid { width: i32, height: i32 },
    /// `STORE <x> <y>`
    Store(Position),
    /// `DEST <x> <y>`
    Destination(Position),
    /// `AGENT <id> <x> <y>`
    Agent { id: String, position: Position },
    /// `EDGE <x1> <y1> <x2> <y2> <cost>`
    Edge {
        from: Position,
        to: Position,
        cost: Cost,
    },
    /// `UNDIRECTED_EDGE <x1> <y1> <x2> <y2> <cost>`
    UndirectedEdge {
        from: Position,
        to: Position,
        cost: Cost,
    },
    /// `BLOCK <x1> <y1> <x2> <y2>`
    Block { from: Position, to: Position },
    /// `TUNNEL <x1> <y1> <x2> <y2>`
    Tunnel { from: Position, to: Position },
    /// Any other keyword. The remainder of the line is not interpreted.
    Unknown(String),
}

impl Directive {
    pub fn is_header(&self) -> bool {
        matches!(self, Directive::Grid { .. })
    }
}
