use crate::search::Heuristic;
use crate::world::Cost;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A state-space search problem, independent of any particular domain.
///
/// Implementations must return the same operators, in the same order, on
/// every call to [`SearchProblem::operators`]; depth-first strategies rely on
/// that order for reproducible results.
pub trait SearchProblem: Debug {
    type State: Clone + Eq + Hash + Debug;
    type Operator: Copy + Eq + Debug + Display;

    fn initial_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    fn operators(&self) -> &[Self::Operator];

    /// The state reached by applying `operator`, or `None` if the operator is
    /// not applicable in `state`.
    fn apply(&self, state: &Self::State, operator: Self::Operator) -> Option<Self::State>;

    /// Cost of applying `operator` in `state`. Inapplicable operators cost
    /// [`crate::UNREACHABLE_COST`].
    fn step_cost(&self, state: &Self::State, operator: Self::Operator) -> Cost;

    /// The remaining-cost estimate used by informed strategies, if the
    /// problem provides one.
    fn heuristic(&self) -> Option<&dyn Heuristic<Self::State>> {
        None
    }
}
