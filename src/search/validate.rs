use crate::search::{Plan, SearchProblem};
use crate::world::Cost;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("step {step}: {operator} is not applicable in state {state}")]
    NotApplicable {
        step: usize,
        operator: String,
        state: String,
    },
    #[error("plan does not reach the goal, final state is {state}")]
    GoalNotReached { state: String },
}

/// Replay `plan` from the problem's initial state and return its total cost.
pub fn validate<P: SearchProblem>(
    plan: &Plan<P::Operator>,
    problem: &P,
) -> Result<Cost, ValidationError> {
    let mut cur_state = problem.initial_state();
    let mut cost: Cost = 0;
    for (step, &operator) in plan.steps().iter().enumerate() {
        let Some(next_state) = problem.apply(&cur_state, operator) else {
            return Err(ValidationError::NotApplicable {
                step,
                operator: operator.to_string(),
                state: format!("{:?}", cur_state),
            });
        };
        cost = cost.saturating_add(problem.step_cost(&cur_state, operator));
        cur_state = next_state;
    }

    if !problem.is_goal(&cur_state) {
        return Err(ValidationError::GoalNotReached {
            state: format!("{:?}", cur_state),
        });
    }

    Ok(cost)
}
