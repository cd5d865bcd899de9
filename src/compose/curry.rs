//! Runtime currying over an explicit arity.
//!
//! [`curry`] wraps a function over a slice of arguments together with the
//! number of arguments it needs. Arguments may then be supplied in any
//! grouping: `call([1]).call([2]).call([3])`, `call([1, 2]).call([3])` and
//! `call([1, 2, 3])` all invoke the function once with `[1, 2, 3]`.
//!
//! Partial applications are immutable values and can be reused. Supplying
//! more arguments than the arity is not an error: the function receives the
//! first `arity` arguments and the rest are dropped.
//!
//! For functions with arguments of different types use the [`curry!`] macro.
//!
//! [`curry!`]: crate::curry
//!
//! # Examples
//!
//! ```rust
//! use adequate::compose::curry;
//!
//! let sum3 = curry(3, |arguments: &[i32]| arguments.iter().sum::<i32>());
//!
//! let add_one = sum3.call([1]);
//! let add_three = add_one.clone().call([2]);
//!
//! assert_eq!(add_three.clone().call([3]).complete(), Some(6));
//! assert_eq!(add_three.call([10]).complete(), Some(13));
//! assert_eq!(add_one.call([5, 5]).complete(), Some(11));
//! assert_eq!(sum3.call([1, 2, 3, 4]).complete(), Some(6));
//! ```

use std::fmt;
use std::rc::Rc;

use smallvec::SmallVec;

/// Arguments are kept inline up to this many.
const INLINE_ARGUMENTS: usize = 4;

/// A function awaiting the rest of its arguments.
pub struct Curry<A, R> {
    function: Rc<dyn Fn(&[A]) -> R>,
    arity: usize,
    arguments: SmallVec<[A; INLINE_ARGUMENTS]>,
}

/// The outcome of supplying arguments to a [`Curry`].
pub enum Applied<A, R> {
    /// Still short of the arity.
    Partial(Curry<A, R>),
    /// The function ran with this result.
    Complete(R),
}

/// Curries `function`, which expects exactly `arity` arguments.
pub fn curry<A, R, F>(arity: usize, function: F) -> Curry<A, R>
where
    F: Fn(&[A]) -> R + 'static,
{
    Curry {
        function: Rc::new(function),
        arity,
        arguments: SmallVec::new(),
    }
}

impl<A: Clone, R> Curry<A, R> {
    /// Supplies the next arguments, leaving `self` untouched.
    ///
    /// Returns [`Applied::Complete`] once the accumulated arguments reach the
    /// arity, [`Applied::Partial`] otherwise.
    pub fn call<I>(&self, arguments: I) -> Applied<A, R>
    where
        I: IntoIterator<Item = A>,
    {
        let mut accumulated = self.arguments.clone();
        accumulated.extend(arguments);

        if accumulated.len() < self.arity {
            return Applied::Partial(Self {
                function: Rc::clone(&self.function),
                arity: self.arity,
                arguments: accumulated,
            });
        }

        #[cfg(feature = "tracing")]
        if accumulated.len() > self.arity {
            tracing::trace!(
                arity = self.arity,
                dropped = accumulated.len() - self.arity,
                "curried function over-applied"
            );
        }

        accumulated.truncate(self.arity);
        Applied::Complete((self.function)(accumulated.as_slice()))
    }
}

impl<A, R> Curry<A, R> {
    /// The number of arguments the function expects in total.
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// How many arguments are still missing.
    pub fn remaining(&self) -> usize {
        self.arity.saturating_sub(self.arguments.len())
    }
}

impl<A: Clone, R> Clone for Curry<A, R> {
    fn clone(&self) -> Self {
        Self {
            function: Rc::clone(&self.function),
            arity: self.arity,
            arguments: self.arguments.clone(),
        }
    }
}

impl<A: fmt::Debug, R> fmt::Debug for Curry<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curry")
            .field("arity", &self.arity)
            .field("arguments", &self.arguments.as_slice())
            .finish_non_exhaustive()
    }
}

impl<A: Clone, R> Applied<A, R> {
    /// Supplies more arguments to a partial application.
    ///
    /// A completed application is returned unchanged.
    pub fn call<I>(self, arguments: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        match self {
            Self::Partial(curried) => curried.call(arguments),
            complete @ Self::Complete(_) => complete,
        }
    }
}

impl<A, R> Applied<A, R> {
    /// The result, if the function has run.
    pub fn complete(self) -> Option<R> {
        match self {
            Self::Partial(_) => None,
            Self::Complete(result) => Some(result),
        }
    }

    /// The partial application, if the function has not run yet.
    pub fn partial(self) -> Option<Curry<A, R>> {
        match self {
            Self::Partial(curried) => Some(curried),
            Self::Complete(_) => None,
        }
    }

    /// Returns `true` once the function has run.
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }
}

impl<A: Clone, R: Clone> Clone for Applied<A, R> {
    fn clone(&self) -> Self {
        match self {
            Self::Partial(curried) => Self::Partial(curried.clone()),
            Self::Complete(result) => Self::Complete(result.clone()),
        }
    }
}

impl<A: fmt::Debug, R: fmt::Debug> fmt::Debug for Applied<A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Partial(curried) => formatter.debug_tuple("Partial").field(curried).finish(),
            Self::Complete(result) => formatter.debug_tuple("Complete").field(result).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn sum3() -> Curry<i32, i32> {
        curry(3, |arguments: &[i32]| arguments.iter().sum())
    }

    #[rstest]
    #[case(vec![vec![1], vec![2], vec![3]])]
    #[case(vec![vec![1, 2], vec![3]])]
    #[case(vec![vec![1], vec![2, 3]])]
    #[case(vec![vec![1, 2, 3]])]
    fn any_grouping_of_arguments_gives_the_same_result(#[case] groups: Vec<Vec<i32>>) {
        let mut applied = Applied::Partial(sum3());
        for group in groups {
            applied = applied.call(group);
        }
        assert_eq!(applied.complete(), Some(6));
    }

    #[rstest]
    fn partial_application_does_not_mutate_the_original() {
        let add_one = sum3().call([1]).partial().unwrap();
        assert_eq!(add_one.remaining(), 2);

        let first = add_one.call([1, 1]).complete();
        let second = add_one.call([2, 2]).complete();
        assert_eq!(first, Some(3));
        assert_eq!(second, Some(5));
        assert_eq!(add_one.remaining(), 2);
    }

    #[rstest]
    fn function_runs_only_when_saturated() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let curried = curry(2, move |arguments: &[u8]| {
            counter.set(counter.get() + 1);
            arguments.len()
        });

        let partial = curried.call([1]);
        assert!(!partial.is_complete());
        assert_eq!(calls.get(), 0);

        assert_eq!(partial.call([2, 3, 4]).complete(), Some(2));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn completed_application_ignores_further_arguments() {
        let complete = sum3().call([1, 2, 3]);
        assert_eq!(complete.call([100]).complete(), Some(6));
    }
}
