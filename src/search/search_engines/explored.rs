use crate::world::Cost;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Outcome of offering a node's state to the explored set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// First time the state is expanded.
    New,
    /// The state was expanded before, but this node reaches it more cheaply
    /// (or, for depth-limited search, at a smaller depth).
    Reopened,
    /// Nothing to gain; the node is discarded.
    Duplicate,
}

/// States already expanded, checked when a node leaves the frontier.
#[derive(Debug, Clone)]
pub enum ExploredSet<S> {
    /// Each state is expanded at most once.
    Closed(HashSet<S>),
    /// A state is expanded again whenever it is reached by a strictly cheaper
    /// path than the best one recorded so far.
    BestCost(HashMap<S, Cost>),
    /// A state is expanded again whenever it is reached at a strictly smaller
    /// depth, where it has more of a depth limit left to spend.
    BestDepth(HashMap<S, usize>),
}

/// Record `value` for `state` unless an equal or smaller one is known.
fn improve<S: Eq + Hash + Clone, V: Ord + Copy>(
    best: &mut HashMap<S, V>,
    state: &S,
    value: V,
) -> Admission {
    match best.get_mut(state) {
        Some(recorded) if *recorded <= value => Admission::Duplicate,
        Some(recorded) => {
            *recorded = value;
            Admission::Reopened
        }
        None => {
            best.insert(state.clone(), value);
            Admission::New
        }
    }
}

impl<S: Eq + Hash + Clone> ExploredSet<S> {
    pub fn closed() -> Self {
        ExploredSet::Closed(HashSet::new())
    }

    pub fn best_cost() -> Self {
        ExploredSet::BestCost(HashMap::new())
    }

    pub fn best_depth() -> Self {
        ExploredSet::BestDepth(HashMap::new())
    }

    /// Decide whether a node for `state`, reached with `path_cost` at
    /// `depth`, should be expanded, recording it if so.
    pub fn admit(&mut self, state: &S, path_cost: Cost, depth: usize) -> Admission {
        match self {
            ExploredSet::Closed(closed) => {
                if closed.insert(state.clone()) {
                    Admission::New
                } else {
                    Admission::Duplicate
                }
            }
            ExploredSet::BestCost(best) => improve(best, state, path_cost),
            ExploredSet::BestDepth(best) => improve(best, state, depth),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ExploredSet::Closed(closed) => closed.len(),
            ExploredSet::BestCost(best) => best.len(),
            ExploredSet::BestDepth(best) => best.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
