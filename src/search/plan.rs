//! A plan is the sequence of operators leading from the initial state to a
//! goal. This module provides the [`Plan`] struct, which represents a plan.

use itertools::Itertools;
use serde::Serialize;
use std::fmt::{self, Display};
use std::ops::Deref;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Plan<O> {
    steps: Vec<O>,
}

impl<O> Plan<O> {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<O>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[O] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<O: FromStr> Plan<O> {
    /// Read a comma separated list of operator labels. The empty string is
    /// the empty plan.
    pub fn from_text(text: &str) -> Result<Self, O::Err> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Self::empty());
        }
        let steps = text
            .split(',')
            .map(|label| label.trim().parse())
            .collect::<Result<Vec<O>, _>>()?;
        Ok(Self { steps })
    }
}

/// Operators in chronological order, comma separated.
impl<O: Display> Display for Plan<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steps.iter().join(","))
    }
}

impl<O> IntoIterator for Plan<O> {
    type Item = O;
    type IntoIter = std::vec::IntoIter<O>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<O> Deref for Plan<O> {
    type Target = [O];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}
