//! Binary search over a sorted copy of the input.
//!
//! The input is sorted ascending before tracing starts; the sort itself is
//! not part of the trace. After each midpoint probe that misses, a `Decide`
//! step highlights the half being discarded.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, ArrayState, Category, Decision, Difficulty, Outcome, StepKind,
    Trace, TraceGenerator, TraceRecorder,
};
use smallvec::smallvec;

use super::DEMO_TARGET;
use crate::sorting::DEMO_ARRAY;

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::BinarySearch,
    name: "Binary Search",
    category: Category::Searching,
    description: "Repeatedly compares the target with the middle of the remaining range of a \
                  sorted array and discards the half that cannot contain it.",
    time_complexity: "O(log n)",
    space_complexity: "O(1)",
    difficulty: Difficulty::Easy,
    reference_code: "\
left = 0; right = n - 1
while left <= right:
    mid = (left + right) / 2
    if a[mid] == target: return mid
    if a[mid] < target: left = mid + 1
    else: right = mid - 1
return not found",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinarySearch {
    input: Vec<i64>,
    target: i64,
}

impl BinarySearch {
    pub fn new(input: impl Into<Vec<i64>>, target: i64) -> Self {
        BinarySearch {
            input: input.into(),
            target,
        }
    }
}

impl Default for BinarySearch {
    fn default() -> Self {
        BinarySearch::new(DEMO_ARRAY, DEMO_TARGET)
    }
}

impl TraceGenerator for BinarySearch {
    type State = ArrayState;

    fn generate_steps(&self) -> Trace<ArrayState> {
        let mut array = self.input.clone();
        array.sort_unstable();
        let target = self.target;

        let mut rec = TraceRecorder::new();
        rec.record(
            StepKind::Init,
            format!("Searching sorted {:?} for {}", array, target),
            ArrayState::new(array.clone()),
        );

        // Half-open window [left, right) avoids underflow at mid = 0.
        let (mut left, mut right) = (0usize, array.len());
        while left < right {
            let mid = (left + right - 1) / 2;
            let mut probe = ArrayState::new(array.clone());
            probe.comparing = smallvec![mid];
            rec.record_with(
                StepKind::Compare,
                format!(
                    "Range [{}..={}], mid = {}: compare {} with {}",
                    left,
                    right - 1,
                    mid,
                    array[mid],
                    target
                ),
                probe,
                (left..right).collect(),
            );

            match array[mid].cmp(&target) {
                Ordering::Equal => {
                    let mut found = ArrayState::new(array.clone());
                    found.sorted = BTreeSet::from([mid]);
                    rec.complete(
                        Outcome::Found { index: mid },
                        format!("Found {} at index {}", target, mid),
                        found,
                    );
                    return rec.finish();
                }
                Ordering::Less => {
                    rec.record_with(
                        StepKind::Decide {
                            decision: Decision::GoRight,
                        },
                        format!(
                            "{} < {}: discard [{}..={}], search right half",
                            array[mid], target, left, mid
                        ),
                        ArrayState::new(array.clone()),
                        (left..=mid).collect(),
                    );
                    left = mid + 1;
                }
                Ordering::Greater => {
                    rec.record_with(
                        StepKind::Decide {
                            decision: Decision::GoLeft,
                        },
                        format!(
                            "{} > {}: discard [{}..={}], search left half",
                            array[mid],
                            target,
                            mid,
                            right - 1
                        ),
                        ArrayState::new(array.clone()),
                        (mid..right).collect(),
                    );
                    right = mid;
                }
            }
        }

        rec.complete(
            Outcome::NotFound,
            format!("{} is not in the array", target),
            ArrayState::new(array),
        );
        rec.finish()
    }

    fn algorithm_info(&self) -> AlgorithmInfo {
        INFO
    }
}
