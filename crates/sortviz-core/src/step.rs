//! Recorded sort steps.
//!
//! A [`StepList`] is owned by a single sort invocation. Step ids are derived
//! from the list length at the time of recording, so numbering always starts
//! at 1 and never leaks between invocations.

use serde::Serialize;

/// Half-open index range `[start, end)` of the sub-list a step concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Focus {
    pub start: usize,
    pub end: usize,
}

/// A snapshot of the working list taken right after one mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// 1-based position of this step in its list.
    pub id: usize,
    /// Full copy of the working list at this point.
    pub list: Vec<i64>,
    /// Sub-list highlighted by this step (merge sort only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus: Option<Focus>,
}

/// Ordered steps produced by one sort invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StepList {
    steps: Vec<Step>,
}

impl StepList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a snapshot of `elements`.
    pub fn record(&mut self, elements: &[i64]) {
        self.push(elements, None);
    }

    /// Appends a snapshot of `elements` highlighting `start..end`.
    pub fn record_focused(&mut self, elements: &[i64], start: usize, end: usize) {
        self.push(elements, Some(Focus { start, end }));
    }

    fn push(&mut self, elements: &[i64], focus: Option<Focus>) {
        let id = self.steps.len() + 1;
        self.steps.push(Step {
            id,
            list: elements.to_vec(),
            focus,
        });
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The final step, whose list is the sorted result.
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl<'a> IntoIterator for &'a StepList {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
