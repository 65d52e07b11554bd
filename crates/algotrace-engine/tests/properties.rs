//! Property tests for the array families: every sort yields a valid trace
//! for arbitrary input, and both searches find any value that is present.

use algotrace_core::{ArrayState, Outcome, Trace, TraceGenerator};
use algotrace_engine::contracts::check::{check_search, check_sorting};
use algotrace_engine::searching::{found_index, BinarySearch, LinearSearch};
use algotrace_engine::sorting::{
    BubbleSort, HeapSort, InsertionSort, MergeSort, QuickSort, SelectionSort,
};
use proptest::prelude::*;

fn all_sorts(input: &[i64]) -> Vec<(&'static str, Trace<ArrayState>)> {
    vec![
        ("bubble", BubbleSort::new(input).generate_steps()),
        ("selection", SelectionSort::new(input).generate_steps()),
        ("insertion", InsertionSort::new(input).generate_steps()),
        ("merge", MergeSort::new(input).generate_steps()),
        ("quick", QuickSort::new(input).generate_steps()),
        ("heap", HeapSort::new(input).generate_steps()),
    ]
}

fn small_array() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-20i64..20, 0..14)
}

proptest! {
    #[test]
    fn sorts_produce_valid_traces(input in small_array()) {
        for (name, trace) in all_sorts(&input) {
            let violations = check_sorting(&trace, &input);
            prop_assert!(violations.is_empty(), "{}: {:?}", name, violations);
        }
    }

    #[test]
    fn sorting_is_deterministic(input in small_array()) {
        for ((name, a), (_, b)) in all_sorts(&input).into_iter().zip(all_sorts(&input)) {
            prop_assert_eq!(a, b, "{} differs between runs", name);
        }
    }

    #[test]
    fn present_values_are_found(input in prop::collection::vec(-20i64..20, 1..14), pick in any::<prop::sample::Index>()) {
        let target = input[pick.index(input.len())];
        for trace in [
            LinearSearch::new(input.clone(), target).generate_steps(),
            BinarySearch::new(input.clone(), target).generate_steps(),
        ] {
            prop_assert!(check_search(&trace, target).is_empty());
            let last = trace.last().unwrap();
            let index = found_index(&trace).expect("present value is found");
            prop_assert_eq!(last.data.array[index], target);
            prop_assert_eq!(last.kind.outcome(), Some(Outcome::Found { index }));
        }
    }

    #[test]
    fn absent_values_are_not_found(input in small_array(), target in 100i64..200) {
        for trace in [
            LinearSearch::new(input.clone(), target).generate_steps(),
            BinarySearch::new(input.clone(), target).generate_steps(),
        ] {
            prop_assert!(check_search(&trace, target).is_empty());
            prop_assert_eq!(found_index(&trace), None);
            prop_assert_eq!(trace.last().unwrap().kind.outcome(), Some(Outcome::NotFound));
        }
    }
}
