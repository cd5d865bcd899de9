//! IO - a deferred, repeatable side effect.
//!
//! `IO<A>` holds a zero-argument function that produces an `A` by causing an
//! effect. Building and combining IO values never runs anything; only
//! [`IO::unsafe_perform_io`] does, and it does so again on every call.
//!
//! # Examples
//!
//! ```rust
//! use adequate::effect::IO;
//! use adequate::typeclass::{Functor, Monad};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let counter = Rc::new(Cell::new(0));
//! let handle = Rc::clone(&counter);
//!
//! let increment = IO::new(move || {
//!     handle.set(handle.get() + 1);
//!     handle.get()
//! });
//! let doubled = increment.map(|count| count * 2);
//!
//! // Nothing has run yet.
//! assert_eq!(counter.get(), 0);
//!
//! assert_eq!(doubled.unsafe_perform_io(), 2);
//! assert_eq!(doubled.unsafe_perform_io(), 4);
//! assert_eq!(counter.get(), 2);
//! ```

use std::fmt;
use std::rc::Rc;

use crate::typeclass::{Applicative, Functor, Join, Monad, TypeConstructor};

/// A description of an effect producing `A`.
///
/// Cloning is cheap and shares the underlying effect; both clones run it
/// independently.
pub struct IO<A> {
    effect: Rc<dyn Fn() -> A>,
}

impl<A: 'static> IO<A> {
    /// Wraps an effectful function without calling it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adequate::effect::IO;
    ///
    /// let io = IO::new(|| 10 + 20);
    /// assert_eq!(io.unsafe_perform_io(), 30);
    /// ```
    pub fn new<F>(effect: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self {
            effect: Rc::new(effect),
        }
    }

    /// An effect that ignores its invocation and returns `value`.
    pub fn of(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || value.clone())
    }

    /// Runs the effect.
    ///
    /// Named to mark the point where referential transparency ends; call it
    /// at the edge of the program.
    pub fn unsafe_perform_io(&self) -> A {
        (self.effect)()
    }

    /// Runs both effects, `self` first, and combines their results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adequate::effect::IO;
    ///
    /// let sum = IO::of(10).map2(IO::of(20), |a, b| a + b);
    /// assert_eq!(sum.unsafe_perform_io(), 30);
    /// ```
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        IO::new(move || {
            let first = self.unsafe_perform_io();
            let second = other.unsafe_perform_io();
            function(first, second)
        })
    }
}

impl<A> Clone for IO<A> {
    fn clone(&self) -> Self {
        Self {
            effect: Rc::clone(&self.effect),
        }
    }
}

impl<A> fmt::Debug for IO<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("IO(<deferred>)")
    }
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<A> TypeConstructor for IO<A> {
    type Inner = A;
    type WithType<B> = IO<B>;
}

impl<A: 'static> Functor for IO<A> {
    fn map<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        IO::new(move || function(self.unsafe_perform_io()))
    }
}

impl<A: 'static> Applicative for IO<A> {
    fn pure<B>(value: B) -> IO<B>
    where
        B: Clone + 'static,
    {
        IO::of(value)
    }

    /// Runs `self` for the function, then `other` for the argument.
    fn ap<B, C>(self, other: IO<B>) -> IO<C>
    where
        A: Fn(B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        self.chain(move |function| other.clone().map(function))
    }
}

impl<A: 'static> Monad for IO<A> {
    /// `map(function).join()`.
    fn chain<B, F>(self, function: F) -> IO<B>
    where
        F: Fn(A) -> IO<B> + 'static,
        B: 'static,
    {
        self.map(function).join()
    }
}

impl<A: 'static> Join for IO<IO<A>> {
    type Flattened = IO<A>;

    fn join(self) -> IO<A> {
        IO::new(move || self.unsafe_perform_io().unsafe_perform_io())
    }
}
