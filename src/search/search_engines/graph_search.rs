//! The search loop shared by every strategy. Strategies differ only in the
//! frontier they pass in, how that frontier is prioritised, the explored-set
//! policy, and an optional depth limit.

use crate::search::{
    search_engines::{
        Admission, ExploredSet, Frontier, SearchNode, SearchOutcome, SearchSpace,
        SearchStatistics,
    },
    SearchProblem,
};
use crate::world::Cost;

type NodeOf<P> = SearchNode<<P as SearchProblem>::State, <P as SearchProblem>::Operator>;

/// Run a graph search.
///
/// The goal test happens when a node is removed from the frontier, so a start
/// state that is already the goal is returned without any expansion. The
/// explored set is consulted at the same point, which lets duplicate nodes
/// sit in the frontier until they surface. Nodes at `depth_limit` are goal
/// tested but never expanded.
pub(crate) fn graph_search<P, F>(
    problem: &P,
    mut frontier: F,
    mut explored: ExploredSet<P::State>,
    priority: impl Fn(&NodeOf<P>) -> Cost,
    depth_limit: Option<usize>,
) -> SearchOutcome<P::State, P::Operator>
where
    P: SearchProblem,
    F: Frontier,
{
    let mut statistics = SearchStatistics::new();
    let mut space = SearchSpace::new(problem.initial_state());
    let root_id = space.get_root_id();
    frontier.push(root_id, priority(space.get_node(root_id)));

    while let Some(node_id) = frontier.pop() {
        let node = space.get_node(node_id);
        if problem.is_goal(node.get_state()) {
            statistics.finalise_search(true);
            return SearchOutcome::success(space, node_id, statistics.expanded_nodes());
        }

        if depth_limit.is_some_and(|limit| node.get_depth() >= limit) {
            statistics.increment_cutoff_nodes();
            continue;
        }

        match explored.admit(node.get_state(), node.get_path_cost(), node.get_depth()) {
            Admission::Duplicate => {
                statistics.increment_pruned_nodes();
                continue;
            }
            Admission::Reopened => statistics.increment_reopened_nodes(),
            Admission::New => {}
        }
        statistics.increment_expanded_nodes();

        let state = node.get_state().clone();
        let mut children = Vec::with_capacity(problem.operators().len());
        for &operator in problem.operators() {
            let Some(successor) = problem.apply(&state, operator) else {
                continue;
            };
            let step_cost = problem.step_cost(&state, operator);
            let child_id = space.insert_child(node_id, successor, operator, step_cost);
            children.push((child_id, priority(space.get_node(child_id))));
        }
        statistics.increment_generated_nodes(children.len());
        frontier.push_children(children);
    }

    statistics.finalise_search(false);
    SearchOutcome::failure(statistics.expanded_nodes())
}
