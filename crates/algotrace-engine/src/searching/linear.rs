//! Linear search: probe each index in order.

use std::collections::BTreeSet;

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, ArrayState, Category, Difficulty, Outcome, StepKind, Trace,
    TraceGenerator, TraceRecorder,
};
use smallvec::smallvec;

use super::DEMO_TARGET;
use crate::sorting::DEMO_ARRAY;

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::LinearSearch,
    name: "Linear Search",
    category: Category::Searching,
    description: "Checks every element from left to right until it finds the target or \
                  runs out of elements. Works on unsorted input.",
    time_complexity: "O(n)",
    space_complexity: "O(1)",
    difficulty: Difficulty::Easy,
    reference_code: "\
for i in 0..n:
    if a[i] == target: return i
return not found",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearSearch {
    input: Vec<i64>,
    target: i64,
}

impl LinearSearch {
    pub fn new(input: impl Into<Vec<i64>>, target: i64) -> Self {
        LinearSearch {
            input: input.into(),
            target,
        }
    }
}

impl Default for LinearSearch {
    fn default() -> Self {
        LinearSearch::new(DEMO_ARRAY, DEMO_TARGET)
    }
}

impl TraceGenerator for LinearSearch {
    type State = ArrayState;

    fn generate_steps(&self) -> Trace<ArrayState> {
        let mut rec = TraceRecorder::new();
        let array = self.input.clone();
        rec.record(
            StepKind::Init,
            format!("Searching {:?} for {}", array, self.target),
            ArrayState::new(array.clone()),
        );

        for (i, &value) in array.iter().enumerate() {
            let mut probe = ArrayState::new(array.clone());
            probe.comparing = smallvec![i];
            rec.record(
                StepKind::Compare,
                format!("Is a[{}] = {} equal to {}?", i, value, self.target),
                probe,
            );
            if value == self.target {
                let mut found = ArrayState::new(array.clone());
                found.sorted = BTreeSet::from([i]);
                rec.complete(
                    Outcome::Found { index: i },
                    format!("Found {} at index {}", self.target, i),
                    found,
                );
                return rec.finish();
            }
        }

        rec.complete(
            Outcome::NotFound,
            format!("{} is not in the array", self.target),
            ArrayState::new(array),
        );
        rec.finish()
    }

    fn algorithm_info(&self) -> AlgorithmInfo {
        INFO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::searching::found_index;

    #[test]
    fn finds_first_occurrence() {
        let trace = LinearSearch::new(vec![4, 7, 7, 1], 7).generate_steps();
        assert_eq!(found_index(&trace), Some(1));
        let last = trace.last().unwrap();
        assert!(last.completed);
        assert_eq!(last.data.sorted.iter().copied().collect::<Vec<_>>(), vec![1]);
        // init + two probes + found
        assert_eq!(trace.len(), 4);
    }

    #[test]
    fn absent_target_probes_everything() {
        let trace = LinearSearch::new(vec![4, 7, 1], 9).generate_steps();
        assert_eq!(found_index(&trace), None);
        let probes = trace.iter().filter(|s| s.kind == StepKind::Compare).count();
        assert_eq!(probes, 3);
        assert_eq!(
            trace.last().unwrap().kind,
            StepKind::Complete {
                outcome: Outcome::NotFound
            }
        );
        assert!(trace.iter().all(|s| s.data.sorted.is_empty()));
    }

    #[test]
    fn empty_array_is_init_and_not_found() {
        let trace = LinearSearch::new(Vec::<i64>::new(), 1).generate_steps();
        assert_eq!(trace.len(), 2);
        assert_eq!(found_index(&trace), None);
    }

    #[test]
    fn default_demo_finds_target() {
        let trace = LinearSearch::default().generate_steps();
        let index = found_index(&trace).unwrap();
        assert_eq!(DEMO_ARRAY[index], DEMO_TARGET);
    }
}
