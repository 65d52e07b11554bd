//! Structural validators over generated traces.
//!
//! Each function returns every violation it finds rather than stopping at
//! the first, sorted by step.

use algotrace_core::{ArrayState, Outcome, StepId, StepKind, Trace};

use super::{TraceViolation, ViolationKind};

fn structure(step: StepId, message: String) -> TraceViolation {
    TraceViolation::new(ViolationKind::Structure, Some(step), message)
}

fn array(step: StepId, message: String) -> TraceViolation {
    TraceViolation::new(ViolationKind::ArrayInvariant, Some(step), message)
}

/// Rules every trace obeys: non-empty, `Init` first, exactly one `Complete`
/// and it is last, `completed` set only there, ids `0..len` in order.
pub fn check_structure<S>(trace: &Trace<S>) -> Vec<TraceViolation> {
    let mut violations = Vec::new();
    let Some(first) = trace.first() else {
        violations.push(TraceViolation::new(
            ViolationKind::Structure,
            None,
            "trace is empty",
        ));
        return violations;
    };
    if first.kind != StepKind::Init {
        violations.push(structure(first.id, format!("first step is {:?}, not Init", first.kind)));
    }

    let last_index = trace.len() - 1;
    for (index, step) in trace.iter().enumerate() {
        if step.id.index() != index {
            violations.push(structure(step.id, format!("step at position {} has id {}", index, step.id)));
        }
        let is_last = index == last_index;
        if step.kind.is_terminal() != is_last {
            violations.push(structure(
                step.id,
                if is_last {
                    format!("last step is {:?}, not Complete", step.kind)
                } else {
                    "Complete step before the end of the trace".to_string()
                },
            ));
        }
        if step.completed != step.kind.is_terminal() {
            violations.push(structure(step.id, "completed flag disagrees with step kind".to_string()));
        }
    }
    violations
}

/// [`check_structure`] plus the sorting invariants: the first step holds
/// `input`, array length never changes, indices stay in bounds, the settled
/// set only grows and covers every index only at the end, and the final
/// array is the sorted input.
pub fn check_sorting(trace: &Trace<ArrayState>, input: &[i64]) -> Vec<TraceViolation> {
    let mut violations = check_structure(trace);
    violations.extend(check_array_bounds(trace, input));
    let Some(last) = trace.last() else {
        return violations;
    };
    let n = input.len();

    let mut previous = 0;
    for (index, step) in trace.iter().enumerate() {
        let settled = step.data.sorted.len();
        if settled < previous {
            violations.push(array(step.id, format!("sorted set shrank from {} to {}", previous, settled)));
        }
        previous = settled;
        if n > 0 && settled == n && index != trace.len() - 1 {
            violations.push(array(step.id, "every index settled before the final step".to_string()));
        }
    }

    if last.data.sorted.len() != n {
        violations.push(array(
            last.id,
            format!("final step settles {} of {} indices", last.data.sorted.len(), n),
        ));
    }
    let mut expected = input.to_vec();
    expected.sort_unstable();
    if last.data.array != expected {
        violations.push(TraceViolation::new(
            ViolationKind::Result,
            Some(last.id),
            format!("final array {:?}, expected {:?}", last.data.array, expected),
        ));
    }
    violations
}

/// [`check_structure`] plus search consistency: a `Found` outcome points at
/// `target` and marks only that index; `NotFound` means `target` is absent.
pub fn check_search(trace: &Trace<ArrayState>, target: i64) -> Vec<TraceViolation> {
    let mut violations = check_structure(trace);
    let Some(first) = trace.first() else {
        return violations;
    };
    violations.extend(check_array_bounds(trace, &first.data.array));
    let Some(last) = trace.last() else {
        return violations;
    };

    match last.kind.outcome() {
        Some(Outcome::Found { index }) => {
            if last.data.array.get(index) != Some(&target) {
                violations.push(TraceViolation::new(
                    ViolationKind::Result,
                    Some(last.id),
                    format!("found index {} does not hold {}", index, target),
                ));
            }
            if last.data.sorted.iter().copied().collect::<Vec<_>>() != vec![index] {
                violations.push(array(last.id, format!("found marker is {:?}", last.data.sorted)));
            }
        }
        Some(Outcome::NotFound) => {
            if last.data.array.contains(&target) {
                violations.push(TraceViolation::new(
                    ViolationKind::Result,
                    Some(last.id),
                    format!("{} is present but the search reported not found", target),
                ));
            }
        }
        other => violations.push(structure(last.id, format!("search ended with {:?}", other))),
    }
    violations
}

/// Array length equals `input.len()` in every step and every referenced
/// index is in range.
fn check_array_bounds(trace: &Trace<ArrayState>, input: &[i64]) -> Vec<TraceViolation> {
    let mut violations = Vec::new();
    if let Some(first) = trace.first() {
        if first.data.array != input {
            violations.push(array(first.id, "first step does not hold the input".to_string()));
        }
    }
    let n = input.len();
    for step in trace {
        if step.data.array.len() != n {
            violations.push(array(
                step.id,
                format!("array length {} differs from input length {}", step.data.array.len(), n),
            ));
        }
        if let Some(bad) = step.data.indices().find(|&i| i >= n) {
            violations.push(array(step.id, format!("index {} out of bounds for length {}", bad, n)));
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use algotrace_core::{Outcome, TraceRecorder};

    fn trace_of(states: Vec<ArrayState>, outcome: Outcome) -> Trace<ArrayState> {
        let mut rec = TraceRecorder::new();
        let mut states = states.into_iter();
        if let Some(first) = states.next() {
            rec.record(StepKind::Init, "init", first);
        }
        let rest: Vec<ArrayState> = states.collect();
        let count = rest.len();
        for (i, state) in rest.into_iter().enumerate() {
            if i + 1 == count {
                rec.complete(outcome, "done", state);
            } else {
                rec.record(StepKind::Compare, "compare", state);
            }
        }
        rec.finish()
    }

    fn settled(array: Vec<i64>, sorted: &[usize]) -> ArrayState {
        let mut state = ArrayState::new(array);
        state.sorted = sorted.iter().copied().collect();
        state
    }

    #[test]
    fn well_formed_sorting_trace_passes() {
        let trace = trace_of(
            vec![settled(vec![2, 1], &[]), settled(vec![1, 2], &[1]), settled(vec![1, 2], &[0, 1])],
            Outcome::Solved,
        );
        assert!(check_sorting(&trace, &[2, 1]).is_empty());
    }

    #[test]
    fn early_full_settlement_is_flagged() {
        let trace = trace_of(
            vec![settled(vec![1, 2], &[]), settled(vec![1, 2], &[0, 1]), settled(vec![1, 2], &[0, 1])],
            Outcome::Solved,
        );
        let violations = check_sorting(&trace, &[1, 2]);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].step, Some(StepId(1)));
    }

    #[test]
    fn unsorted_final_array_is_a_result_violation() {
        let trace = trace_of(vec![settled(vec![2, 1], &[]), settled(vec![2, 1], &[0, 1])], Outcome::Solved);
        let violations = check_sorting(&trace, &[2, 1]);
        assert!(violations.iter().any(|v| v.kind == ViolationKind::Result));
    }

    #[test]
    fn missing_complete_is_structural() {
        let mut rec = TraceRecorder::new();
        rec.record(StepKind::Init, "init", ());
        rec.record(StepKind::Compare, "compare", ());
        let violations = check_structure(&rec.finish());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::Structure);
        assert!(check_structure::<()>(&Vec::new()).len() == 1);
    }

    #[test]
    fn wrong_found_index_is_flagged() {
        let trace = trace_of(
            vec![ArrayState::new(vec![4, 5]), settled(vec![4, 5], &[0])],
            Outcome::Found { index: 0 },
        );
        assert!(check_search(&trace, 4).is_empty());
        assert!(!check_search(&trace, 5).is_empty());
    }

    #[test]
    fn not_found_with_target_present_is_flagged() {
        let trace = trace_of(
            vec![ArrayState::new(vec![4, 5]), ArrayState::new(vec![4, 5])],
            Outcome::NotFound,
        );
        assert!(!check_search(&trace, 5).is_empty());
        assert!(check_search(&trace, 6).is_empty());
    }
}
