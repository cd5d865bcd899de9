#![cfg(feature = "effect")]
//! Unit tests for Task.
//!
//! Covers settlement exclusivity, laziness, short-circuiting on rejection and
//! the ordering guarantees of `chain`, `ap` and `ap_parallel`.

use adequate::effect::Task;
use adequate::typeclass::{Applicative, Functor, Join, Monad};
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

static_assertions::assert_impl_all!(Task<String, i32>: Clone);
static_assertions::assert_not_impl_any!(Task<String, i32>: Send, Sync);

/// Records which callbacks a fork invoked.
struct Outcome<E, T> {
    rejected: RefCell<Vec<E>>,
    resolved: RefCell<Vec<T>>,
}

fn fork_recording<E: 'static, T: 'static>(task: &Task<E, T>) -> Rc<Outcome<E, T>> {
    let outcome = Rc::new(Outcome {
        rejected: RefCell::new(Vec::new()),
        resolved: RefCell::new(Vec::new()),
    });
    let on_reject = Rc::clone(&outcome);
    let on_resolve = Rc::clone(&outcome);
    task.fork(
        move |error| on_reject.rejected.borrow_mut().push(error),
        move |value| on_resolve.resolved.borrow_mut().push(value),
    );
    outcome
}

// =============================================================================
// Settlement
// =============================================================================

mod settlement {
    use super::*;

    #[rstest]
    fn of_resolves_once() {
        let outcome = fork_recording(&Task::<String, i32>::of(3));
        assert_eq!(*outcome.resolved.borrow(), vec![3]);
        assert!(outcome.rejected.borrow().is_empty());
    }

    #[rstest]
    fn rejected_rejects_once() {
        let outcome = fork_recording(&Task::<&str, i32>::rejected("boom"));
        assert_eq!(*outcome.rejected.borrow(), vec!["boom"]);
        assert!(outcome.resolved.borrow().is_empty());
    }

    #[rstest]
    fn a_misbehaving_body_still_settles_exactly_once() {
        let task: Task<&str, i32> = Task::new(|reject, resolve| {
            reject("first");
            resolve(1);
            reject("second");
        });

        let outcome = fork_recording(&task);
        assert_eq!(*outcome.rejected.borrow(), vec!["first"]);
        assert!(outcome.resolved.borrow().is_empty());
    }

    #[rstest]
    fn every_fork_is_an_independent_run() {
        let runs = Rc::new(Cell::new(0));
        let handle = Rc::clone(&runs);
        let task: Task<(), u32> = Task::new(move |_, resolve| {
            handle.set(handle.get() + 1);
            resolve(handle.get());
        });

        assert_eq!(task.run_sync(), Some(Ok(1)));
        assert_eq!(task.run_sync(), Some(Ok(2)));
        assert_eq!(runs.get(), 2);
    }
}

// =============================================================================
// Functor and Monad
// =============================================================================

mod capabilities {
    use super::*;

    #[rstest]
    fn map_resolves_with_the_mapped_value() {
        assert_eq!(Task::<String, i32>::of(3).map(|x| x + 1).run_sync(), Some(Ok(4)));
    }

    #[rstest]
    fn map_forwards_rejection_without_calling_the_function() {
        let called = Rc::new(Cell::new(false));
        let flag = Rc::clone(&called);
        let task = Task::<&str, i32>::rejected("boom").map(move |x| {
            flag.set(true);
            x + 1
        });

        assert_eq!(task.run_sync(), Some(Err("boom")));
        assert!(!called.get());
    }

    #[rstest]
    fn chain_starts_the_second_task_only_after_the_first_resolves() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let first_events = Rc::clone(&events);
        let second_events = Rc::clone(&events);

        let first: Task<String, i32> = Task::new(move |_, resolve| {
            first_events.borrow_mut().push("a started");
            resolve(1);
            first_events.borrow_mut().push("a resolved");
        });
        let task = first.chain(move |value| {
            let events = Rc::clone(&second_events);
            Task::new(move |_, resolve| {
                events.borrow_mut().push("b started");
                resolve(value + 1);
            })
        });

        assert_eq!(task.run_sync(), Some(Ok(2)));
        assert_eq!(*events.borrow(), vec!["a started", "b started", "a resolved"]);
    }

    #[rstest]
    fn chain_rejection_of_the_first_task_reaches_the_outer_reject() {
        let started = Rc::new(Cell::new(false));
        let flag = Rc::clone(&started);
        let task = Task::<String, i32>::rejected("a failed".to_string()).chain(move |x| {
            flag.set(true);
            Task::of(x)
        });

        assert_eq!(task.run_sync(), Some(Err("a failed".to_string())));
        assert!(!started.get());
    }

    #[rstest]
    fn chain_rejection_of_the_second_task_reaches_the_outer_reject() {
        let task = Task::<&str, i32>::of(1).chain(|_| Task::<&str, i32>::rejected("b failed"));
        assert_eq!(task.run_sync(), Some(Err("b failed")));
    }

    #[rstest]
    fn join_is_chain_identity() {
        let nested = Task::<String, Task<String, i32>>::of(Task::of(9));
        assert_eq!(nested.join().run_sync(), Some(Ok(9)));
    }
}

// =============================================================================
// Applicative
// =============================================================================

mod applicative {
    use super::*;

    fn recording(events: &Rc<RefCell<Vec<String>>>, name: &'static str, value: i32) -> Task<String, i32> {
        let events = Rc::clone(events);
        Task::new(move |_, resolve| {
            events.borrow_mut().push(format!("{name} forked"));
            resolve(value);
        })
    }

    #[rstest]
    fn ap_is_sequential() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let add = |x: i32| move |y: i32| x + y;

        let task = <Task<String, ()>>::pure(add)
            .ap(recording(&events, "a", 1))
            .ap(recording(&events, "b", 2));

        assert!(events.borrow().is_empty());
        assert_eq!(task.run_sync(), Some(Ok(3)));
        assert_eq!(*events.borrow(), vec!["a forked", "b forked"]);
    }

    #[rstest]
    fn ap_short_circuits_on_the_first_rejection() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let task = Task::<String, fn(i32) -> i32>::rejected("no function".to_string())
            .ap(recording(&events, "value", 1));

        assert_eq!(task.run_sync(), Some(Err("no function".to_string())));
        assert!(events.borrow().is_empty());
    }

    #[rstest]
    fn ap_parallel_forks_both_sides_even_when_the_function_fails() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let task = Task::<String, fn(i32) -> i32>::rejected("no function".to_string())
            .ap_parallel(recording(&events, "value", 1));

        assert_eq!(task.run_sync(), Some(Err("no function".to_string())));
        assert_eq!(*events.borrow(), vec!["value forked"]);
    }

    #[rstest]
    fn ap_parallel_applies_when_both_resolve() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let task = Task::<String, _>::of(|x: i32| x * 10).ap_parallel(recording(&events, "value", 4));
        assert_eq!(task.run_sync(), Some(Ok(40)));
    }
}
