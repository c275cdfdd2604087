use crate::search::{
    search_engines::{NodeId, SearchNode, SearchSpace},
    Plan,
};
use crate::world::Cost;
use std::fmt::{self, Display};

/// The goal node together with the tree it hangs from.
#[derive(Debug)]
struct Solution<S, O> {
    space: SearchSpace<S, O>,
    goal_id: NodeId,
}

/// Result of one search: the goal node (if one was reached) and the number of
/// nodes expanded to get there. Failing to reach the goal is an ordinary
/// outcome, not an error.
#[derive(Debug)]
pub struct SearchOutcome<S, O> {
    solution: Option<Solution<S, O>>,
    nodes_expanded: usize,
}

impl<S, O> SearchOutcome<S, O> {
    pub fn success(space: SearchSpace<S, O>, goal_id: NodeId, nodes_expanded: usize) -> Self {
        Self {
            solution: Some(Solution { space, goal_id }),
            nodes_expanded,
        }
    }

    /// The search tree is dropped on failure; only the count survives.
    pub fn failure(nodes_expanded: usize) -> Self {
        Self {
            solution: None,
            nodes_expanded,
        }
    }

    pub fn is_success(&self) -> bool {
        self.solution.is_some()
    }

    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    pub fn goal_node(&self) -> Option<&SearchNode<S, O>> {
        self.solution
            .as_ref()
            .map(|solution| solution.space.get_node(solution.goal_id))
    }

    /// Total cost of the path to the goal. Authoritative for every strategy,
    /// including those that do not minimise it.
    pub fn cost(&self) -> Option<Cost> {
        self.goal_node().map(|node| node.get_path_cost())
    }

    pub fn depth(&self) -> Option<usize> {
        self.goal_node().map(|node| node.get_depth())
    }
}

impl<S: Clone, O: Clone> SearchOutcome<S, O> {
    /// Operators from the initial state to the goal, in order.
    pub fn plan(&self) -> Option<Plan<O>> {
        self.solution
            .as_ref()
            .map(|solution| solution.space.extract_plan(solution.goal_id))
    }

    /// States visited from the initial state to the goal, both included.
    pub fn states(&self) -> Option<Vec<S>> {
        self.solution
            .as_ref()
            .map(|solution| solution.space.extract_states(solution.goal_id))
    }
}

/// `<plan>;<cost>;<nodesExpanded>`, or `null;inf;<nodesExpanded>` when no goal
/// was reached.
impl<S: Clone, O: Clone + Display> Display for SearchOutcome<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.plan(), self.cost()) {
            (Some(plan), Some(cost)) => write!(f, "{};{};{}", plan, cost, self.nodes_expanded),
            _ => write!(f, "null;inf;{}", self.nodes_expanded),
        }
    }
}
