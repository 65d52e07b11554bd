//! Quick sort with the Lomuto partition scheme.
//!
//! Pivot is the last element of the range. Elements strictly less than the
//! pivot are swapped to the front. The left partition is sorted before the
//! right one.

use algotrace_core::{
    AlgorithmId, AlgorithmInfo, ArrayState, Category, Difficulty, StepKind, Trace, TraceGenerator,
};

use super::{ArrayTracer, DEMO_ARRAY};

pub const INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::QuickSort,
    name: "Quick Sort",
    category: Category::Sorting,
    description: "Picks the last element as pivot, partitions the range so smaller elements \
                  come first, places the pivot between the two parts and recurses on each.",
    time_complexity: "O(n log n) average, O(n^2) worst",
    space_complexity: "O(log n)",
    difficulty: Difficulty::Medium,
    reference_code: "\
quick_sort(a, lo, hi):
    if lo >= hi: return
    pivot = a[hi]; i = lo
    for j in lo..hi:
        if a[j] < pivot: swap(a[i], a[j]); i += 1
    swap(a[i], a[hi])
    quick_sort(a, lo, i-1); quick_sort(a, i+1, hi)",
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickSort {
    input: Vec<i64>,
}

impl QuickSort {
    pub fn new(input: impl Into<Vec<i64>>) -> Self {
        QuickSort {
            input: input.into(),
        }
    }
}

impl Default for QuickSort {
    fn default() -> Self {
        QuickSort::new(DEMO_ARRAY)
    }
}

impl TraceGenerator for QuickSort {
    type State = ArrayState;

    fn generate_steps(&self) -> Trace<ArrayState> {
        let mut tracer = ArrayTracer::new(&self.input);
        if !self.input.is_empty() {
            let hi = tracer.len() - 1;
            sort_range(&mut tracer, 0, hi);
        }
        tracer.finish()
    }

    fn algorithm_info(&self) -> AlgorithmInfo {
        INFO
    }
}

fn sort_range(tracer: &mut ArrayTracer, lo: usize, hi: usize) {
    if lo > hi {
        return;
    }
    if lo == hi {
        tracer.settle(lo);
        return;
    }
    let pivot = partition(tracer, lo, hi);
    tracer.settle(pivot);
    if pivot > lo {
        sort_range(tracer, lo, pivot - 1);
    }
    sort_range(tracer, pivot + 1, hi);
}

fn partition(tracer: &mut ArrayTracer, lo: usize, hi: usize) -> usize {
    let pivot = tracer.value(hi);
    tracer.range(
        StepKind::Consider,
        format!("Partitioning [{}..={}] around pivot {}", lo, hi, pivot),
        lo,
        hi,
    );
    let mut i = lo;
    for j in lo..hi {
        let value = tracer.value(j);
        tracer.compare_with(j, hi, format!("Is {} < pivot {}?", value, pivot));
        if value < pivot {
            tracer.swap(i, j);
            i += 1;
        }
    }
    tracer.swap(i, hi);
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sorting::test_support::*;

    #[test]
    fn sorts_example() {
        let input = vec![10, 80, 30, 90, 40, 50, 70];
        let trace = QuickSort::new(input.clone()).generate_steps();
        assert_sorting_trace(&trace, &input);
    }

    #[test]
    fn first_partition_uses_last_element_as_pivot() {
        let trace = QuickSort::new(vec![3, 1, 2]).generate_steps();
        let first = trace.iter().find(|s| s.kind == StepKind::Consider).unwrap();
        assert!(first.description.contains("pivot 2"));
        assert_eq!(first.highlights, vec![0, 1, 2]);
    }

    #[test]
    fn pivot_is_settled_after_partition() {
        // [4, 3, 1, 2]: pivot 2 lands at index 1, then [2..=3] is partitioned
        let trace = QuickSort::new(vec![4, 3, 1, 2]).generate_steps();
        let settled_early = trace
            .iter()
            .find(|s| !s.data.sorted.is_empty())
            .unwrap();
        assert!(!settled_early.completed);
        assert!(settled_early.data.sorted.contains(&1));
    }

    #[test]
    fn duplicates_and_negatives() {
        let input = vec![0, -5, 7, -5, 7, 3];
        let trace = QuickSort::new(input.clone()).generate_steps();
        assert_sorting_trace(&trace, &input);
    }
}
