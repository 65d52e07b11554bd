//! Sorting trace generators.
//!
//! All six sorts share [`ArrayTracer`], which owns the working copy of the
//! input plus the settled-index set and records an [`ArrayState`] snapshot at
//! each comparison, swap and write. Settling an index never emits a step on
//! its own; the next recorded step shows it. The terminal step settles every
//! index, so the full index set appears only there.

pub mod bubble;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub use bubble::BubbleSort;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;

use std::cmp::Ordering;

use algotrace_core::{ArrayState, Outcome, StepKind, Trace, TraceRecorder};
use smallvec::{smallvec, SmallVec};

/// Input used when no array is supplied.
pub const DEMO_ARRAY: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];

/// Working array plus recorder for one sorting run.
pub(crate) struct ArrayTracer {
    array: Vec<i64>,
    sorted: std::collections::BTreeSet<usize>,
    recorder: TraceRecorder<ArrayState>,
}

impl ArrayTracer {
    /// Copies `input` and records the initial step.
    pub(crate) fn new(input: &[i64]) -> Self {
        let mut tracer = ArrayTracer {
            array: input.to_vec(),
            sorted: Default::default(),
            recorder: TraceRecorder::new(),
        };
        let description = format!("Initial array {:?}", tracer.array);
        tracer.emit(StepKind::Init, description, SmallVec::new(), SmallVec::new(), Vec::new());
        tracer
    }

    pub(crate) fn len(&self) -> usize {
        self.array.len()
    }

    pub(crate) fn value(&self, index: usize) -> i64 {
        self.array[index]
    }

    /// Records a comparison of positions `i` and `j` and returns
    /// `array[i].cmp(&array[j])`.
    pub(crate) fn compare(&mut self, i: usize, j: usize) -> Ordering {
        let (a, b) = (self.array[i], self.array[j]);
        let description = format!(
            "Comparing {} (index {}) with {} (index {})",
            a, i, b, j
        );
        self.emit(StepKind::Compare, description, smallvec![i, j], SmallVec::new(), Vec::new());
        a.cmp(&b)
    }

    /// Records a comparison of position `i` against a value held outside the
    /// array (a pivot or merge buffer). `j` is the position shown alongside.
    pub(crate) fn compare_with(&mut self, i: usize, j: usize, description: String) {
        self.emit(StepKind::Compare, description, smallvec![i, j], SmallVec::new(), Vec::new());
    }

    /// Exchanges two positions and records the result. Swapping a position
    /// with itself is a no-op and records nothing.
    pub(crate) fn swap(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        self.array.swap(i, j);
        let description = format!(
            "Swapped index {} and {}: now {} and {}",
            i, j, self.array[i], self.array[j]
        );
        self.emit(StepKind::Swap, description, SmallVec::new(), smallvec![i, j], Vec::new());
    }

    /// Records entering or leaving a recursive call on `lo..=hi`.
    pub(crate) fn range(&mut self, kind: StepKind, description: String, lo: usize, hi: usize) {
        self.emit(kind, description, SmallVec::new(), SmallVec::new(), (lo..=hi).collect());
    }

    /// Overwrites one position (merge sort's copy-back) and records it.
    pub(crate) fn write(&mut self, index: usize, value: i64, description: String) {
        let changed = self.array[index] != value;
        self.array[index] = value;
        self.emit(
            StepKind::Update { changed },
            description,
            SmallVec::new(),
            SmallVec::new(),
            vec![index],
        );
    }

    /// Marks a position as holding its final value.
    pub(crate) fn settle(&mut self, index: usize) {
        self.sorted.insert(index);
    }

    /// Settles every index, records the terminal step and returns the trace.
    pub(crate) fn finish(mut self) -> Trace<ArrayState> {
        self.sorted.extend(0..self.array.len());
        let description = format!("Sorted array {:?}", self.array);
        let data = self.snapshot(SmallVec::new(), SmallVec::new());
        self.recorder.complete(Outcome::Solved, description, data);
        self.recorder.finish()
    }

    fn snapshot(
        &self,
        comparing: SmallVec<[usize; 2]>,
        swapping: SmallVec<[usize; 2]>,
    ) -> ArrayState {
        ArrayState {
            array: self.array.clone(),
            comparing,
            swapping,
            sorted: self.sorted.clone(),
        }
    }

    fn emit(
        &mut self,
        kind: StepKind,
        description: String,
        comparing: SmallVec<[usize; 2]>,
        swapping: SmallVec<[usize; 2]>,
        highlights: Vec<usize>,
    ) {
        let data = self.snapshot(comparing, swapping);
        self.recorder.record_with(kind, description, data, highlights);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use algotrace_core::{ArrayState, StepKind, Trace};

    /// Final array of a sorting trace.
    pub(crate) fn final_array(trace: &Trace<ArrayState>) -> Vec<i64> {
        trace.last().map(|s| s.data.array.clone()).unwrap_or_default()
    }

    pub(crate) fn count_kind(trace: &Trace<ArrayState>, kind: StepKind) -> usize {
        trace.iter().filter(|s| s.kind == kind).count()
    }

    /// Asserts the invariants every sorting trace must satisfy.
    pub(crate) fn assert_sorting_trace(trace: &Trace<ArrayState>, input: &[i64]) {
        assert!(trace.len() >= 2);
        assert_eq!(trace[0].kind, StepKind::Init);
        assert_eq!(trace[0].data.array, input);
        assert!(trace[0].data.sorted.is_empty());

        let n = input.len();
        let mut previous = 0;
        for (i, step) in trace.iter().enumerate() {
            assert_eq!(step.data.array.len(), n);
            assert!(step.data.indices().all(|idx| idx < n));
            assert!(step.data.sorted.len() >= previous, "sorted shrank at step {}", i);
            previous = step.data.sorted.len();
            if i + 1 < trace.len() && n > 0 {
                assert!(step.data.sorted.len() < n, "full sorted set before the end at step {}", i);
            }
        }

        let last = trace.last().unwrap();
        assert!(last.completed);
        assert_eq!(last.data.sorted.len(), n);
        let mut expected = input.to_vec();
        expected.sort();
        assert_eq!(last.data.array, expected);
    }
}
