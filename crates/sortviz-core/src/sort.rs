//! Step-recording sort implementations and dispatch.
//!
//! Each algorithm takes ownership of its working list, sorts it in place and
//! returns the recorded [`StepList`]. Inputs with fewer than two elements
//! produce no steps. Every recorded step holds a full copy of the working
//! list, so all snapshots have the input's length.

use serde::{Deserialize, Deserializer};

use crate::algorithm::Algorithm;
use crate::error::CoreError;
use crate::step::StepList;

/// A decoded sort request.
///
/// A missing or `null` `elements` field decodes as an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SortInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub elements: Vec<i64>,
    pub algorithm: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<i64>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Resolves the algorithm named by `input` and runs it.
///
/// Returns [`CoreError::UnknownAlgorithm`] when the identifier is not
/// registered; no steps are produced in that case.
pub fn sort(input: SortInput) -> Result<StepList, CoreError> {
    let algorithm: Algorithm = input.algorithm.parse()?;
    Ok(algorithm.run(input.elements))
}

/// Bubble sort, recording a step after every adjacent swap.
pub fn bubble_sort(mut elements: Vec<i64>) -> StepList {
    let mut steps = StepList::new();
    let n = elements.len();
    if n < 2 {
        return steps;
    }

    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            // Strict comparison: equal neighbours stay put.
            if elements[j] > elements[j + 1] {
                elements.swap(j, j + 1);
                steps.record(&elements);
            }
        }
    }
    steps
}

/// Insertion sort, recording one step per outer iteration once the key is
/// placed. Iterations that move nothing still record a step.
pub fn insertion_sort(mut elements: Vec<i64>) -> StepList {
    let mut steps = StepList::new();
    let n = elements.len();
    if n < 2 {
        return steps;
    }

    for i in 0..n {
        let key = elements[i];
        let mut j = i;
        while j > 0 && elements[j - 1] > key {
            elements[j] = elements[j - 1];
            j -= 1;
        }
        elements[j] = key;
        steps.record(&elements);
    }
    steps
}

/// Top-down merge sort.
///
/// Records a step focused on each sub-list when its recursive call starts,
/// and another once its two halves have been merged back into the working
/// list.
pub fn merge_sort(mut elements: Vec<i64>) -> StepList {
    let mut steps = StepList::new();
    let len = elements.len();
    merge_sort_range(&mut elements, 0, len, &mut steps);
    steps
}

fn merge_sort_range(elements: &mut [i64], start: usize, end: usize, steps: &mut StepList) {
    if end - start < 2 {
        return;
    }
    steps.record_focused(elements, start, end);

    let mid = start + (end - start) / 2;
    merge_sort_range(elements, start, mid, steps);
    merge_sort_range(elements, mid, end, steps);
    merge(elements, start, mid, end);

    steps.record_focused(elements, start, end);
}

/// Merges the sorted runs `start..mid` and `mid..end` in place.
/// Takes from the right run only when strictly smaller, so ties keep
/// left-run order.
fn merge<T: PartialOrd + Clone>(elements: &mut [T], start: usize, mid: usize, end: usize) {
    let left = elements[start..mid].to_vec();
    let right = elements[mid..end].to_vec();

    let (mut i, mut j) = (0, 0);
    for slot in &mut elements[start..end] {
        let take_right = match (left.get(i), right.get(j)) {
            (Some(l), Some(r)) => r < l,
            (None, Some(_)) => true,
            _ => false,
        };
        if take_right {
            *slot = right[j].clone();
            j += 1;
        } else {
            *slot = left[i].clone();
            i += 1;
        }
    }
}
