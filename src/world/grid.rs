use crate::parsed_types::{Directive, WorldDescription};
use crate::world::{Agent, Position, WorldError};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, warn};

/// Cost of traversing an edge.
pub type Cost = u64;

/// Stand-in for "no edge". Large but finite, so that cost sums stay within
/// integer arithmetic (all sums saturate).
pub const UNREACHABLE_COST: Cost = u64::MAX / 4;

/// A bounded 2D lattice with explicitly recorded, directed edge costs.
///
/// An edge recorded with cost `0` is blocked. Tunnels are symmetric shortcuts
/// kept apart from ordinary edges.
#[derive(Debug, Clone)]
pub struct Grid {
    width: i32,
    height: i32,
    edge_costs: HashMap<(Position, Position), Cost>,
    tunnel_partners: HashMap<Position, Position>,
    tunnels: Vec<(Position, Position)>,
    stores: Vec<Position>,
    destinations: Vec<Position>,
    agents: Vec<Agent>,
}

impl Grid {
    pub fn new(width: i32, height: i32) -> Result<Self, WorldError> {
        if width <= 0 || height <= 0 {
            return Err(WorldError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            edge_costs: HashMap::new(),
            tunnel_partners: HashMap::new(),
            tunnels: Vec::new(),
            stores: Vec::new(),
            destinations: Vec::new(),
            agents: Vec::new(),
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, WorldError> {
        let text = fs::read_to_string(path).map_err(|source| WorldError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self, WorldError> {
        let description = WorldDescription::from_str(text)?;
        Self::from_description(&description)
    }

    /// Build a grid from already parsed directives. The first directive must
    /// be the `GRID` header.
    pub fn from_description(description: &WorldDescription) -> Result<Self, WorldError> {
        let mut lines = description.lines().iter();
        let mut grid = match lines.next() {
            Some(line) => match line.directive() {
                Directive::Grid { width, height } => {
                    Grid::new(*width, *height).map_err(|e| e.at_line(line.number()))?
                }
                _ => return Err(WorldError::MissingGridHeader.at_line(line.number())),
            },
            None => return Err(WorldError::MissingGridHeader),
        };

        for line in lines {
            grid.apply_directive(line.directive())
                .map_err(|e| e.at_line(line.number()))?;
        }

        debug!(
            width = grid.width,
            height = grid.height,
            edges = grid.edge_costs.len(),
            tunnels = grid.tunnels.len(),
            agents = grid.agents.len(),
            "built grid"
        );
        Ok(grid)
    }

    fn apply_directive(&mut self, directive: &Directive) -> Result<(), WorldError> {
        match directive {
            Directive::Grid { .. } => return Err(WorldError::DuplicateGridHeader),
            Directive::Store(p) => self.add_store(*p)?,
            Directive::Destination(p) => self.add_destination(*p)?,
            Directive::Agent { id, position } => self.add_agent(Agent::new(id, *position))?,
            Directive::Edge { from, to, cost } => self.set_edge(*from, *to, *cost),
            Directive::UndirectedEdge { from, to, cost } => {
                self.set_undirected_edge(*from, *to, *cost)
            }
            Directive::Block { from, to } => self.block(*from, *to),
            Directive::Tunnel { from, to } => self.add_tunnel(*from, *to)?,
            Directive::Unknown(keyword) => warn!(keyword = %keyword, "unknown directive, skipping"),
        }
        Ok(())
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn stores(&self) -> &[Position] {
        &self.stores
    }

    pub fn destinations(&self) -> &[Position] {
        &self.destinations
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn tunnels(&self) -> &[(Position, Position)] {
        &self.tunnels
    }

    pub fn in_bounds(&self, p: &Position) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }

    fn check_bounds(&self, p: Position) -> Result<(), WorldError> {
        if self.in_bounds(&p) {
            Ok(())
        } else {
            Err(WorldError::OutOfBounds {
                position: p,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Record a directed edge. A cost of `0` marks the edge as blocked.
    pub fn set_edge(&mut self, from: Position, to: Position, cost: Cost) {
        self.edge_costs.insert((from, to), cost);
    }

    pub fn set_undirected_edge(&mut self, a: Position, b: Position, cost: Cost) {
        self.set_edge(a, b, cost);
        self.set_edge(b, a, cost);
    }

    pub fn block(&mut self, a: Position, b: Position) {
        self.set_undirected_edge(a, b, 0);
    }

    /// Register a tunnel between `a` and `b`. Each position can be the
    /// endpoint of at most one tunnel.
    pub fn add_tunnel(&mut self, a: Position, b: Position) -> Result<(), WorldError> {
        self.check_bounds(a)?;
        self.check_bounds(b)?;
        for endpoint in [a, b] {
            if self.tunnel_partners.contains_key(&endpoint) {
                return Err(WorldError::DuplicateTunnel(endpoint));
            }
        }
        self.tunnel_partners.insert(a, b);
        self.tunnel_partners.insert(b, a);
        self.tunnels.push((a, b));
        Ok(())
    }

    pub fn add_store(&mut self, p: Position) -> Result<(), WorldError> {
        self.check_bounds(p)?;
        self.stores.push(p);
        Ok(())
    }

    pub fn add_destination(&mut self, p: Position) -> Result<(), WorldError> {
        self.check_bounds(p)?;
        self.destinations.push(p);
        Ok(())
    }

    pub fn add_agent(&mut self, agent: Agent) -> Result<(), WorldError> {
        self.check_bounds(agent.position)?;
        self.agents.push(agent);
        Ok(())
    }

    /// The recorded cost of the directed edge `from -> to`. No symmetry is
    /// implied.
    pub fn edge_cost(&self, from: &Position, to: &Position) -> Option<Cost> {
        self.edge_costs.get(&(*from, *to)).copied()
    }

    pub fn is_blocked(&self, from: &Position, to: &Position) -> bool {
        self.edge_cost(from, to) == Some(0)
    }

    pub fn tunnel_partner(&self, p: &Position) -> Option<Position> {
        self.tunnel_partners.get(p).copied()
    }

    /// Cost of moving from `from` to `to` in one step. Tunnels take priority
    /// over any ordinary edge between the same cells.
    pub fn move_cost(&self, from: &Position, to: &Position) -> Cost {
        if self.tunnel_partner(from).as_ref() == Some(to) {
            return tunnel_cost(from, to);
        }
        self.edge_cost(from, to).unwrap_or(UNREACHABLE_COST)
    }

    /// The cheapest recorded edge cost above zero, or `1` if there is none.
    pub fn min_positive_edge_cost(&self) -> Cost {
        self.edge_costs
            .values()
            .copied()
            .filter(|&cost| cost > 0)
            .min()
            .unwrap_or(1)
    }

    /// Cells reachable in one step from `p`: open 4-neighbours first, then the
    /// tunnel partner.
    pub fn neighbors(&self, p: &Position) -> Vec<Position> {
        let mut result: Vec<Position> = [(1, 0), (-1, 0), (0, 1), (0, -1)]
            .into_iter()
            .filter_map(|(dx, dy)| p.offset(dx, dy))
            .filter(|q| self.in_bounds(q))
            .filter(|q| matches!(self.edge_cost(p, q), Some(cost) if cost > 0))
            .collect();
        if let Some(partner) = self.tunnel_partner(p) {
            result.push(partner);
        }
        result
    }
}

/// Tunnel traversal costs the Manhattan distance between the endpoints, and
/// never less than one.
pub(crate) fn tunnel_cost(a: &Position, b: &Position) -> Cost {
    a.manhattan_distance(b).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn edges_are_directed() {
        let mut grid = Grid::new(2, 1).unwrap();
        let a = Position::new(0, 0);
        let b = Position::new(1, 0);
        grid.set_edge(a, b, 3);
        assert_eq!(grid.edge_cost(&a, &b), Some(3));
        assert_eq!(grid.edge_cost(&b, &a), None);
        assert_eq!(grid.move_cost(&b, &a), UNREACHABLE_COST);
    }

    #[test]
    fn block_records_zero_both_ways() {
        let mut grid = Grid::new(2, 1).unwrap();
        let a = Position::new(0, 0);
        let b = Position::new(1, 0);
        grid.set_undirected_edge(a, b, 4);
        grid.block(a, b);
        assert!(grid.is_blocked(&a, &b));
        assert!(grid.is_blocked(&b, &a));
        assert_eq!(grid.move_cost(&a, &b), 0);
    }

    #[test]
    fn tunnel_lookup_is_symmetric() {
        let mut grid = Grid::new(5, 5).unwrap();
        let a = Position::new(0, 0);
        let b = Position::new(4, 4);
        grid.add_tunnel(a, b).unwrap();
        assert_eq!(grid.tunnel_partner(&a), Some(b));
        assert_eq!(grid.tunnel_partner(&b), Some(a));
        assert_eq!(grid.tunnel_partner(&Position::new(1, 1)), None);
    }

    #[test]
    fn tunnel_cost_overrides_coincident_edge() {
        let mut grid = Grid::new(2, 1).unwrap();
        let a = Position::new(0, 0);
        let b = Position::new(1, 0);
        grid.set_edge(a, b, 9);
        grid.add_tunnel(a, b).unwrap();
        assert_eq!(grid.move_cost(&a, &b), 1);
    }

    #[test]
    fn same_cell_tunnel_costs_one() {
        let mut grid = Grid::new(1, 1).unwrap();
        let a = Position::new(0, 0);
        grid.add_tunnel(a, a).unwrap();
        assert_eq!(grid.tunnel_partner(&a), Some(a));
        assert_eq!(grid.move_cost(&a, &a), 1);
    }

    #[test]
    fn second_tunnel_on_endpoint_is_rejected() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.add_tunnel(Position::new(0, 0), Position::new(2, 2))
            .unwrap();
        let result = grid.add_tunnel(Position::new(1, 1), Position::new(2, 2));
        assert!(matches!(result, Err(WorldError::DuplicateTunnel(p)) if p == Position::new(2, 2)));
    }

    #[test]
    fn out_of_bounds_points_are_rejected() {
        let mut grid = Grid::new(2, 2).unwrap();
        assert!(grid.add_store(Position::new(2, 0)).is_err());
        assert!(grid.add_destination(Position::new(0, -1)).is_err());
        assert!(grid
            .add_tunnel(Position::new(0, 0), Position::new(5, 5))
            .is_err());
        assert!(grid.add_agent(Agent::new("a", Position::new(1, 1))).is_ok());
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        assert!(matches!(
            Grid::new(0, 3),
            Err(WorldError::InvalidDimensions { width: 0, height: 3 })
        ));
        assert!(Grid::new(3, -1).is_err());
    }

    #[test]
    fn min_positive_edge_cost_ignores_blocked_edges() {
        let mut grid = Grid::new(3, 1).unwrap();
        assert_eq!(grid.min_positive_edge_cost(), 1);
        grid.set_edge(Position::new(0, 0), Position::new(1, 0), 0);
        assert_eq!(grid.min_positive_edge_cost(), 1);
        grid.set_edge(Position::new(1, 0), Position::new(2, 0), 5);
        grid.set_edge(Position::new(2, 0), Position::new(1, 0), 3);
        assert_eq!(grid.min_positive_edge_cost(), 3);
    }

    #[test]
    fn neighbors_skip_blocked_and_missing_edges() {
        let grid = Grid::from_text(BLOCKED_DETOUR_WORLD_TEXT).unwrap();
        let neighbors = grid.neighbors(&Position::new(0, 0));
        assert_eq!(neighbors, vec![Position::new(0, 1)]);
    }

    #[test]
    fn from_text_reads_sample_world() {
        let grid = Grid::from_text(SAMPLE_WORLD_TEXT).unwrap();
        assert_eq!((grid.width(), grid.height()), (5, 5));
        assert_eq!(grid.stores().len(), 1);
        assert_eq!(grid.destinations().len(), 2);
        assert_eq!(grid.agents().len(), 2);
        assert_eq!(grid.agents()[0].id, "A1");
        assert_eq!(grid.tunnels().len(), 1);
    }

    #[test]
    fn directive_before_header_is_fatal() {
        let result = Grid::from_text("# comment\nSTORE 0 0\nGRID 2 2\n");
        match result {
            Err(WorldError::AtLine { line, source }) => {
                assert_eq!(line, 2);
                assert!(matches!(*source, WorldError::MissingGridHeader));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn empty_description_is_fatal() {
        assert!(matches!(
            Grid::from_text("\n# nothing here\n"),
            Err(WorldError::MissingGridHeader)
        ));
    }

    #[test]
    fn duplicate_header_is_fatal() {
        assert!(matches!(
            Grid::from_text("GRID 2 2\nGRID 3 3\n"),
            Err(WorldError::AtLine { line: 2, .. })
        ));
    }

    #[test]
    fn unknown_directive_is_skipped() {
        let grid = Grid::from_text("GRID 2 2\nTELEPORT 0 0 1 1\nDEST 1 1\n").unwrap();
        assert_eq!(grid.destinations(), &[Position::new(1, 1)]);
    }

    #[test]
    fn from_path_reads_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), SCENARIO_A_WORLD_TEXT).unwrap();
        let grid = Grid::from_path(file.path()).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(
            grid.edge_cost(&Position::new(0, 0), &Position::new(1, 0)),
            Some(1)
        );
    }

    #[test]
    fn from_path_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.world");
        assert!(matches!(
            Grid::from_path(&missing),
            Err(WorldError::Io { .. })
        ));
    }
}
