//! Frontier orderings shared by the search engines.

use crate::search::search_engines::NodeId;
use crate::world::Cost;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::collections::VecDeque;
use std::fmt::Debug;

/// Generated-but-not-yet-expanded nodes. The same state may be present
/// several times under different nodes; duplicates are filtered when nodes
/// are removed, not when they are inserted.
pub trait Frontier: Debug {
    /// Insert a node. `priority` is ignored by unordered frontiers.
    fn push(&mut self, node_id: NodeId, priority: Cost);

    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert the children of one expansion, given in operator order.
    fn push_children(&mut self, children: Vec<(NodeId, Cost)>) {
        for (node_id, priority) in children {
            self.push(node_id, priority);
        }
    }
}

/// First in, first out.
#[derive(Debug, Default)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    fn push(&mut self, node_id: NodeId, _priority: Cost) {
        self.queue.push_back(node_id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out.
#[derive(Debug, Default)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl LifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    fn push(&mut self, node_id: NodeId, _priority: Cost) {
        self.stack.push(node_id);
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    /// Children go on the stack in reverse so that they come off in operator
    /// order.
    fn push_children(&mut self, children: Vec<(NodeId, Cost)>) {
        for (node_id, priority) in children.into_iter().rev() {
            self.push(node_id, priority);
        }
    }
}

/// Lowest priority first. Equal priorities come out in insertion order, which
/// keeps every best-first strategy deterministic.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    queue: PriorityQueue<NodeId, Reverse<(Cost, NodeId)>>,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, node_id: NodeId, priority: Cost) {
        self.queue.push(node_id, Reverse((priority, node_id)));
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|(node_id, _)| node_id)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
