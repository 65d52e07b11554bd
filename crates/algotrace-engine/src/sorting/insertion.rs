//! Insertion sort, shifting by adjacent swaps.
//!
//! No position is final until the last element has been inserted, so the
//! settled set stays empty until the terminal step.

use std::cmp::Ordering;

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, ArrayState, Category, Difficulty, Trace, TraceGenerator,
};

use super::{ArrayTracer, DEMO_ARRAY};

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::InsertionSort,
    name: "Insertion Sort",
    category: Category::Sorting,
    description: "Takes each element in turn and moves it left past every larger element, \
                  keeping the prefix sorted. Fast on nearly sorted input.",
    time_complexity: "O(n^2)",
    space_complexity: "O(1)",
    difficulty: Difficulty::Easy,
    reference_code: "\
for i in 1..n:
    j = i
    while j > 0 and a[j-1] > a[j]:
        swap(a[j-1], a[j]); j -= 1",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionSort {
    input: Vec<i64>,
}

impl InsertionSort {
    pub fn new(input: impl Into<Vec<i64>>) -> Self {
        InsertionSort {
            input: input.into(),
        }
    }
}

impl Default for InsertionSort {
    fn default() -> Self {
        InsertionSort::new(DEMO_ARRAY)
    }
}

impl TraceGenerator for InsertionSort {
    type State = ArrayState;

    fn generate_steps(&self) -> Trace<ArrayState> {
        let mut tracer = ArrayTracer::new(&self.input);
        for i in 1..tracer.len() {
            let mut j = i;
            while j > 0 && tracer.compare(j - 1, j) == Ordering::Greater {
                tracer.swap(j - 1, j);
                j -= 1;
            }
        }
        tracer.finish()
    }

    fn algorithm_info(&self) -> AlgorithmInfo {
        INFO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::test_support::*;
    use algotrace_core::StepKind;

    #[test]
    fn sorts_example() {
        let input = vec![12, 11, 13, 5, 6];
        let trace = InsertionSort::new(input.clone()).generate_steps();
        assert_sorting_trace(&trace, &input);
    }

    #[test]
    fn sorted_input_needs_one_compare_per_element() {
        let trace = InsertionSort::new(vec![1, 2, 3, 4, 5]).generate_steps();
        assert_eq!(count_kind(&trace, StepKind::Compare), 4);
        assert_eq!(count_kind(&trace, StepKind::Swap), 0);
    }

    #[test]
    fn nothing_settles_before_the_end() {
        let trace = InsertionSort::new(vec![3, 2, 1]).generate_steps();
        let (last, rest) = trace.split_last().unwrap();
        assert!(rest.iter().all(|s| s.data.sorted.is_empty()));
        assert_eq!(last.data.sorted.len(), 3);
    }
}
