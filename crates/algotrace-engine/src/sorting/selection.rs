//! Selection sort: select the minimum of the unsorted suffix each pass.

use std::cmp::Ordering;

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, ArrayState, Category, Difficulty, Trace, TraceGenerator,
};

use super::{ArrayTracer, DEMO_ARRAY};

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::SelectionSort,
    name: "Selection Sort",
    category: Category::Sorting,
    description: "Finds the smallest element of the unsorted suffix and swaps it into the \
                  first unsorted position, growing a sorted prefix by one element per pass.",
    time_complexity: "O(n^2)",
    space_complexity: "O(1)",
    difficulty: Difficulty::Easy,
    reference_code: "\
for i in 0..n-1:
    min = i
    for j in i+1..n:
        if a[j] < a[min]: min = j
    swap(a[i], a[min])",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSort {
    input: Vec<i64>,
}

impl SelectionSort {
    pub fn new(input: impl Into<Vec<i64>>) -> Self {
        SelectionSort {
            input: input.into(),
        }
    }
}

impl Default for SelectionSort {
    fn default() -> Self {
        SelectionSort::new(DEMO_ARRAY)
    }
}

impl TraceGenerator for SelectionSort {
    type State = ArrayState;

    fn generate_steps(&self) -> Trace<ArrayState> {
        let mut tracer = ArrayTracer::new(&self.input);
        let n = tracer.len();
        for i in 0..n.saturating_sub(1) {
            let mut min = i;
            for j in i + 1..n {
                // compare(j, min) reads as "is a[j] smaller than the current minimum"
                if tracer.compare(j, min) == Ordering::Less {
                    min = j;
                }
            }
            tracer.swap(i, min);
            tracer.settle(i);
        }
        tracer.finish()
    }

    fn algorithm_info(&self) -> AlgorithmInfo {
        INFO
    }
}
