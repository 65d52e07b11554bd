//! Top-down merge sort with explicit left/right buffers.
//!
//! The merge takes from the left buffer on ties (`<=`), which keeps equal
//! elements in their original relative order.

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, ArrayState, Category, Difficulty, StepKind, Trace, TraceGenerator,
};

use super::{ArrayTracer, DEMO_ARRAY};

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::MergeSort,
    name: "Merge Sort",
    category: Category::Sorting,
    description: "Splits the array in half, sorts each half recursively and merges the two \
                  sorted halves through temporary buffers. Stable.",
    time_complexity: "O(n log n)",
    space_complexity: "O(n)",
    difficulty: Difficulty::Medium,
    reference_code: "\
merge_sort(a, start, end):
    if start >= end: return
    mid = (start + end) / 2
    merge_sort(a, start, mid); merge_sort(a, mid+1, end)
    left = a[start..=mid]; right = a[mid+1..=end]
    while both non-empty:
        a[k++] = left[i] <= right[j] ? left[i++] : right[j++]
    copy the remainder",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSort {
    input: Vec<i64>,
}

impl MergeSort {
    pub fn new(input: impl Into<Vec<i64>>) -> Self {
        MergeSort {
            input: input.into(),
        }
    }
}

impl Default for MergeSort {
    fn default() -> Self {
        MergeSort::new(DEMO_ARRAY)
    }
}

impl TraceGenerator for MergeSort {
    type State = ArrayState;

    fn generate_steps(&self) -> Trace<ArrayState> {
        let mut tracer = ArrayTracer::new(&self.input);
        if tracer.len() > 1 {
            let end = tracer.len() - 1;
            sort_range(&mut tracer, 0, end);
        }
        tracer.finish()
    }

    fn algorithm_info(&self) -> AlgorithmInfo {
        INFO
    }
}

fn sort_range(tracer: &mut ArrayTracer, start: usize, end: usize) {
    if start >= end {
        return;
    }
    let mid = (start + end) / 2;
    tracer.range(
        StepKind::Consider,
        format!("Splitting [{}..={}] at {}", start, end, mid),
        start,
        end,
    );
    sort_range(tracer, start, mid);
    sort_range(tracer, mid + 1, end);
    merge(tracer, start, mid, end);
    tracer.range(
        StepKind::Finish,
        format!("Merged [{}..={}]", start, end),
        start,
        end,
    );
}

fn merge(tracer: &mut ArrayTracer, start: usize, mid: usize, end: usize) {
    let left: Vec<i64> = (start..=mid).map(|i| tracer.value(i)).collect();
    let right: Vec<i64> = (mid + 1..=end).map(|i| tracer.value(i)).collect();
    let (mut i, mut j, mut k) = (0, 0, start);

    while i < left.len() && j < right.len() {
        tracer.compare_with(
            start + i,
            mid + 1 + j,
            format!("Merging: left {} vs right {}", left[i], right[j]),
        );
        if left[i] <= right[j] {
            tracer.write(k, left[i], format!("Placed {} from left at index {}", left[i], k));
            i += 1;
        } else {
            tracer.write(k, right[j], format!("Placed {} from right at index {}", right[j], k));
            j += 1;
        }
        k += 1;
    }
    for &value in &left[i..] {
        tracer.write(k, value, format!("Copied remaining left {} to index {}", value, k));
        k += 1;
    }
    for &value in &right[j..] {
        tracer.write(k, value, format!("Copied remaining right {} to index {}", value, k));
        k += 1;
    }
}
