#![cfg(all(feature = "control", feature = "effect"))]
//! Property-based tests for the Functor laws.
//!
//! - **Identity Law**: `fa.map(|x| x) == fa`
//! - **Composition Law**: `fa.map(f).map(g) == fa.map(|x| g(f(x)))`
//!
//! For IO and Task, equality means performing or forking both sides yields
//! the same outcome.

use adequate::control::{Either, Maybe};
use adequate::effect::{IO, Task};
use adequate::typeclass::Functor;
use proptest::prelude::*;

fn either_strategy() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<String>().prop_map(Either::Left),
        any::<i32>().prop_map(Either::Right),
    ]
}

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    any::<Option<i32>>().prop_map(Maybe::from)
}

fn task_strategy() -> impl Strategy<Value = Task<String, i32>> {
    prop_oneof![
        any::<String>().prop_map(Task::rejected),
        any::<i32>().prop_map(Task::of),
    ]
}

// =============================================================================
// Either<L, R>
// =============================================================================

proptest! {
    #[test]
    fn prop_either_identity_law(value in either_strategy()) {
        prop_assert_eq!(value.clone().map(|x| x), value);
    }

    #[test]
    fn prop_either_composition_law(value in either_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.clone().map(function1).map(function2);
        let right = value.map(move |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Maybe<T>
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_identity_law(value in maybe_strategy()) {
        prop_assert_eq!(value.map(|x| x), value);
    }

    #[test]
    fn prop_maybe_composition_law(value in maybe_strategy()) {
        let function1 = |n: i32| n.to_string();
        let function2 = |s: String| s.len();

        let left = value.map(function1).map(function2);
        let right = value.map(move |x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// IO<A>
// =============================================================================

proptest! {
    #[test]
    fn prop_io_identity_law(value in any::<i32>()) {
        let io = IO::of(value);
        prop_assert_eq!(io.clone().map(|x| x).unsafe_perform_io(), io.unsafe_perform_io());
    }

    #[test]
    fn prop_io_composition_law(value in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_sub(7);
        let function2 = |n: i32| i64::from(n) * 3;

        let left = IO::of(value).map(function1).map(function2);
        let right = IO::of(value).map(move |x| function2(function1(x)));

        prop_assert_eq!(left.unsafe_perform_io(), right.unsafe_perform_io());
    }
}

// =============================================================================
// Task<E, T>
// =============================================================================

proptest! {
    #[test]
    fn prop_task_identity_law(task in task_strategy()) {
        prop_assert_eq!(task.clone().map(|x| x).run_sync(), task.run_sync());
    }

    #[test]
    fn prop_task_composition_law(task in task_strategy()) {
        let function1 = |n: i32| n.wrapping_add(3);
        let function2 = |n: i32| n % 5;

        let left = task.clone().map(function1).map(function2);
        let right = task.map(move |x| function2(function1(x)));

        prop_assert_eq!(left.run_sync(), right.run_sync());
    }
}
