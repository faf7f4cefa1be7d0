use std::rc::Rc;

use crate::actions::CounterAction;
use crate::state::CounterState;

/// Reducer - pure function that produces new state from current state + action
///
/// Known actions always yield a fresh `Rc`; unknown actions hand back the
/// input `Rc` itself so callers can detect "no change" with `Rc::ptr_eq`.
/// Fields other than `count` are carried over from the input.
#[allow(clippy::needless_update)]
pub fn reduce(state: Rc<CounterState>, action: &CounterAction) -> Rc<CounterState> {
    match action {
        CounterAction::Add => Rc::new(CounterState {
            count: state.count.wrapping_add(1),
            ..*state
        }),
        CounterAction::Subtract => Rc::new(CounterState {
            count: state.count.wrapping_sub(1),
            ..*state
        }),
        CounterAction::Reset => Rc::new(CounterState { count: 0, ..*state }),
        CounterAction::Unknown => {
            log::trace!("Unhandled action {}, state unchanged", action.type_name());
            state
        }
    }
}

/// Reduce starting from the initial state when no prior state exists
pub fn reduce_or_init(state: Option<Rc<CounterState>>, action: &CounterAction) -> Rc<CounterState> {
    let state = state.unwrap_or_else(|| Rc::new(CounterState::initial()));
    reduce(state, action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{add, reset, subtract};
    use pretty_assertions::assert_eq;

    const SAMPLES: [i64; 7] = [i64::MIN + 1, -42, -1, 0, 1, 42, i64::MAX - 1];

    fn state(count: i64) -> Rc<CounterState> {
        Rc::new(CounterState::new(count))
    }

    #[test]
    fn test_add_increments() {
        for n in SAMPLES {
            assert_eq!(reduce(state(n), &add()).count, n + 1);
        }
    }

    #[test]
    fn test_subtract_decrements() {
        for n in SAMPLES {
            assert_eq!(reduce(state(n), &subtract()).count, n - 1);
        }
    }

    #[test]
    fn test_reset_is_zero_and_idempotent() {
        for n in SAMPLES {
            let once = reduce(state(n), &reset());
            assert_eq!(once.count, 0);

            let twice = reduce(once.clone(), &reset());
            assert_eq!(twice, once);
        }
    }

    #[test]
    fn test_unknown_passes_through_same_value() {
        let before = state(7);
        let after = reduce(before.clone(), &CounterAction::Unknown);
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_known_actions_produce_new_value() {
        let before = state(7);
        let after = reduce(before.clone(), &reset());
        assert!(!Rc::ptr_eq(&before, &after));
        // input is left as it was
        assert_eq!(before.count, 7);
    }

    #[test]
    fn test_reduce_is_deterministic() {
        let s = state(3);
        for action in [add(), subtract(), reset(), CounterAction::Unknown] {
            let first = reduce(s.clone(), &action);
            let second = reduce(s.clone(), &action);
            assert_eq!(first, second);
            assert_eq!(s.count, 3);
        }
    }

    #[test]
    fn test_bounds_wrap_instead_of_panicking() {
        assert_eq!(reduce(state(i64::MAX), &add()).count, i64::MIN);
        assert_eq!(reduce(state(i64::MIN), &subtract()).count, i64::MAX);
    }

    #[test]
    #[allow(clippy::needless_update)]
    fn test_known_actions_keep_the_rest_of_the_state() {
        let before = state(9);
        for action in [add(), subtract(), reset()] {
            let after = reduce(before.clone(), &action);
            assert_eq!(
                CounterState { count: 0, ..*after },
                CounterState { count: 0, ..*before }
            );
        }
    }

    #[test]
    fn test_reduce_or_init_defaults_missing_state() {
        assert_eq!(reduce_or_init(None, &add()).count, 1);
        assert_eq!(reduce_or_init(None, &CounterAction::Unknown).count, 0);
        assert_eq!(reduce_or_init(Some(state(5)), &subtract()).count, 4);
    }
}
