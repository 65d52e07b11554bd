//! Bubble sort with early exit on a pass without swaps.

use std::cmp::Ordering;

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, ArrayState, Category, Difficulty, Trace, TraceGenerator,
};

use super::{ArrayTracer, DEMO_ARRAY};

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::BubbleSort,
    name: "Bubble Sort",
    category: Category::Sorting,
    description: "Repeatedly steps through the array, swapping adjacent elements that are out \
                  of order. After each pass the largest unsorted element has bubbled to the end.",
    time_complexity: "O(n^2)",
    space_complexity: "O(1)",
    difficulty: Difficulty::Easy,
    reference_code: "\
for i in 0..n-1:
    swapped = false
    for j in 0..n-1-i:
        if a[j] > a[j+1]:
            swap(a[j], a[j+1]); swapped = true
    if not swapped: break",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleSort {
    input: Vec<i64>,
}

impl BubbleSort {
    pub fn new(input: impl Into<Vec<i64>>) -> Self {
        BubbleSort {
            input: input.into(),
        }
    }
}

impl Default for BubbleSort {
    fn default() -> Self {
        BubbleSort::new(DEMO_ARRAY)
    }
}

impl TraceGenerator for BubbleSort {
    type State = ArrayState;

    fn generate_steps(&self) -> Trace<ArrayState> {
        let mut tracer = ArrayTracer::new(&self.input);
        let n = tracer.len();
        for pass in 0..n.saturating_sub(1) {
            let mut swapped = false;
            for j in 0..n - 1 - pass {
                if tracer.compare(j, j + 1) == Ordering::Greater {
                    tracer.swap(j, j + 1);
                    swapped = true;
                }
            }
            tracer.settle(n - 1 - pass);
            if !swapped {
                break;
            }
        }
        tracer.finish()
    }

    fn algorithm_info(&self) -> AlgorithmInfo {
        INFO
    }
}
