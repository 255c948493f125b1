//! The closed set of registered sorting algorithms.
//!
//! Identifiers are matched exactly (case-sensitive) against the wire names
//! `"bubble"`, `"insertion"` and `"merge"`. Anything else is a
//! [`CoreError::UnknownAlgorithm`].

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;
use crate::sort;
use crate::step::StepList;

/// A step-recording sorting algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bubble,
    Insertion,
    Merge,
}

impl Algorithm {
    /// Every registered algorithm, in listing order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Bubble, Algorithm::Insertion, Algorithm::Merge];

    /// Wire name of this algorithm.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
        }
    }

    /// Sorts `elements` in place, recording every step.
    pub fn run(self, elements: Vec<i64>) -> StepList {
        match self {
            Algorithm::Bubble => sort::bubble_sort(elements),
            Algorithm::Insertion => sort::insertion_sort(elements),
            Algorithm::Merge => sort::merge_sort(elements),
        }
    }
}

impl FromStr for Algorithm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == s)
            .ok_or_else(|| CoreError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
