use crate::world::Cost;

/// Handle of a node inside a [`crate::search::search_engines::SearchSpace`].
/// Handles are handed out in creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// A node of the search tree. Nodes are immutable once created; the tree is
/// formed by parent handles pointing towards the root.
#[derive(Debug, Clone)]
pub struct SearchNode<S, O> {
    /// The state this node represents
    state: S,
    /// Parent node, `None` for the root
    parent_id: Option<NodeId>,
    /// Operator that led from the parent to this node
    action: Option<O>,
    /// Cumulative cost from the root, i.e. the g-value
    path_cost: Cost,
    /// Number of operators applied since the root
    depth: usize,
}

impl<S, O> SearchNode<S, O> {
    pub fn new_without_parent(state: S) -> Self {
        Self {
            state,
            parent_id: None,
            action: None,
            path_cost: 0,
            depth: 0,
        }
    }

    pub fn new_with_parent(
        state: S,
        parent_id: NodeId,
        parent: &SearchNode<S, O>,
        action: O,
        step_cost: Cost,
    ) -> Self {
        Self {
            state,
            parent_id: Some(parent_id),
            action: Some(action),
            path_cost: parent.path_cost.saturating_add(step_cost),
            depth: parent.depth + 1,
        }
    }

    pub fn get_state(&self) -> &S {
        &self.state
    }

    pub fn get_parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    pub fn get_action(&self) -> Option<&O> {
        self.action.as_ref()
    }

    pub fn get_path_cost(&self) -> Cost {
        self.path_cost
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
