#![cfg(feature = "effect")]
//! Unit tests for IO.
//!
//! IO only describes an effect: building and combining values must not run
//! anything, and every `unsafe_perform_io` runs the effect again.

use adequate::effect::IO;
use adequate::typeclass::{Applicative, Functor, Join, Monad};
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

static_assertions::assert_impl_all!(IO<i32>: Clone);
static_assertions::assert_not_impl_any!(IO<i32>: Send, Sync);

// =============================================================================
// Basic Operations
// =============================================================================

mod basic_operations {
    use super::*;

    #[rstest]
    fn of_ignores_the_invocation() {
        assert_eq!(IO::of("hello".to_string()).unsafe_perform_io(), "hello");
    }

    #[rstest]
    fn new_with_capturing_closure() {
        let value = 10;
        let io = IO::new(move || value * 3);
        assert_eq!(io.unsafe_perform_io(), 30);
    }

    #[rstest]
    fn pure_agrees_with_of() {
        let io: IO<i32> = <IO<()>>::pure(8);
        assert_eq!(io.unsafe_perform_io(), 8);
    }
}

// =============================================================================
// Laziness
// =============================================================================

mod lazy_evaluation {
    use super::*;

    #[rstest]
    fn building_a_pipeline_runs_nothing() {
        let executed = Rc::new(Cell::new(false));
        let flag = Rc::clone(&executed);

        let io = IO::new(move || {
            flag.set(true);
            1
        })
        .map(|x| x + 1)
        .chain(|x| IO::of(x * 10));

        assert!(!executed.get(), "IO should not execute on creation");
        assert_eq!(io.unsafe_perform_io(), 20);
        assert!(executed.get());
    }

    #[rstest]
    fn map_over_of_has_no_effect_until_performed() {
        let io = IO::of(1).map(|x| x + 1);
        assert_eq!(io.unsafe_perform_io(), 2);
    }
}

// =============================================================================
// Repetition
// =============================================================================

mod repetition {
    use super::*;

    #[rstest]
    fn performing_twice_runs_the_effect_twice() {
        let counter = Rc::new(Cell::new(0));
        let handle = Rc::clone(&counter);
        let increment = IO::new(move || handle.set(handle.get() + 1));

        increment.unsafe_perform_io();
        increment.unsafe_perform_io();

        assert_eq!(counter.get(), 2);
    }

    #[rstest]
    fn chained_pipeline_reruns_every_step() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&log);
        let second = Rc::clone(&log);

        let io = IO::new(move || first.borrow_mut().push("read"))
            .chain(move |()| {
                let second = Rc::clone(&second);
                IO::new(move || second.borrow_mut().push("write"))
            });

        io.unsafe_perform_io();
        io.unsafe_perform_io();

        assert_eq!(*log.borrow(), vec!["read", "write", "read", "write"]);
    }
}

// =============================================================================
// Applicative and Join
// =============================================================================

mod combination {
    use super::*;

    #[rstest]
    fn ap_runs_self_before_other() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let function_order = Rc::clone(&order);
        let value_order = Rc::clone(&order);

        let function = IO::new(move || {
            function_order.borrow_mut().push(1);
            |x: i32| x * 2
        });
        let value = IO::new(move || {
            value_order.borrow_mut().push(2);
            21
        });

        assert_eq!(function.ap(value).unsafe_perform_io(), 42);
        assert_eq!(*order.borrow(), vec![1, 2]);
    }

    #[rstest]
    fn join_runs_outer_then_inner_effect() {
        let nested = IO::of(IO::of(5));
        assert_eq!(nested.join().unsafe_perform_io(), 5);
    }

    #[rstest]
    fn map2_combines_in_order() {
        let io = IO::of("a".to_string()).map2(IO::of("b".to_string()), |a, b| a + &b);
        assert_eq!(io.unsafe_perform_io(), "ab");
    }
}
