//! Heap sort over an implicit max-heap.

use std::cmp::Ordering;

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, ArrayState, Category, Difficulty, StepKind, Trace, TraceGenerator,
};

use super::{ArrayTracer, DEMO_ARRAY};

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::HeapSort,
    name: "Heap Sort",
    category: Category::Sorting,
    description: "Builds a max-heap bottom-up, then repeatedly swaps the root with the last \
                  unsorted element and sifts the new root down the shrinking heap.",
    time_complexity: "O(n log n)",
    space_complexity: "O(1)",
    difficulty: Difficulty::Hard,
    reference_code: "\
for i in (0..n/2).rev(): heapify(a, n, i)
for end in (1..n).rev():
    swap(a[0], a[end]); heapify(a, end, 0)

heapify(a, n, i):
    largest = max of i, 2i+1, 2i+2 within n
    if largest != i: swap(a[i], a[largest]); heapify(a, n, largest)",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapSort {
    input: Vec<i64>,
}

impl HeapSort {
    pub fn new(input: impl Into<Vec<i64>>) -> Self {
        HeapSort {
            input: input.into(),
        }
    }
}

impl Default for HeapSort {
    fn default() -> Self {
        HeapSort::new(DEMO_ARRAY)
    }
}

impl TraceGenerator for HeapSort {
    type State = ArrayState;

    fn generate_steps(&self) -> Trace<ArrayState> {
        let mut tracer = ArrayTracer::new(&self.input);
        let n = tracer.len();
        for i in (0..n / 2).rev() {
            heapify(&mut tracer, n, i);
        }
        if n > 1 {
            tracer.range(
                StepKind::Finish,
                format!("Max-heap built, root is {}", tracer.value(0)),
                0,
                n - 1,
            );
        }
        for end in (1..n).rev() {
            tracer.swap(0, end);
            tracer.settle(end);
            heapify(&mut tracer, end, 0);
        }
        tracer.finish()
    }

    fn algorithm_info(&self) -> AlgorithmInfo {
        INFO
    }
}

fn heapify(tracer: &mut ArrayTracer, heap_len: usize, root: usize) {
    let mut largest = root;
    for child in [2 * root + 1, 2 * root + 2] {
        if child < heap_len && tracer.compare(child, largest) == Ordering::Greater {
            largest = child;
        }
    }
    if largest != root {
        tracer.swap(root, largest);
        heapify(tracer, heap_len, largest);
    }
}
