use crate::search::{
    search_engines::{NodeId, SearchNode},
    Plan,
};
use crate::world::Cost;
use segvec::{Linear, SegVec};
use std::fmt;

/// Arena owning every node generated during one search.
pub struct SearchSpace<S, O> {
    root_id: NodeId,
    nodes: SegVec<SearchNode<S, O>, Linear>,
}

impl<S, O> SearchSpace<S, O> {
    pub fn new(initial_state: S) -> Self {
        let mut nodes = SegVec::new();
        nodes.push(SearchNode::new_without_parent(initial_state));
        Self {
            root_id: NodeId(0),
            nodes,
        }
    }

    /// Create a child of `parent_id` and return its handle.
    pub fn insert_child(
        &mut self,
        parent_id: NodeId,
        state: S,
        action: O,
        step_cost: Cost,
    ) -> NodeId {
        let child = SearchNode::new_with_parent(
            state,
            parent_id,
            self.get_node(parent_id),
            action,
            step_cost,
        );
        let child_id = NodeId(self.nodes.len());
        self.nodes.push(child);
        child_id
    }

    pub fn get_root_id(&self) -> NodeId {
        self.root_id
    }

    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<S, O> {
        self.nodes.get(node_id.0).expect("Invalid node id")
    }

    /// Nodes on the path from the root to `node_id`, root first.
    fn path_to(&self, node_id: NodeId) -> Vec<&SearchNode<S, O>> {
        let mut path = vec![];
        let mut current = Some(node_id);
        while let Some(id) = current {
            let node = self.get_node(id);
            path.push(node);
            current = node.get_parent_id();
        }
        path.reverse();
        path
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }
}

impl<S, O> fmt::Debug for SearchSpace<S, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchSpace")
            .field("root_id", &self.root_id)
            .field("nodes", &self.nodes.len())
            .finish()
    }
}

impl<S: Clone, O: Clone> SearchSpace<S, O> {
    pub fn extract_plan(&self, goal_id: NodeId) -> Plan<O> {
        Plan::new(
            self.path_to(goal_id)
                .into_iter()
                .filter_map(|node| node.get_action().cloned())
                .collect(),
        )
    }

    pub fn extract_states(&self, goal_id: NodeId) -> Vec<S> {
        self.path_to(goal_id)
            .into_iter()
            .map(|node| node.get_state().clone())
            .collect()
    }
}
