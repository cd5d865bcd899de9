//! Monad type class - sequencing dependent computations.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! pure(a).chain(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.chain(pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use adequate::control::Either;
//! use adequate::typeclass::{Join, Monad};
//!
//! fn positive(value: i32) -> Either<String, i32> {
//!     if value > 0 {
//!         Either::of(value)
//!     } else {
//!         Either::Left(format!("{value} is not positive"))
//!     }
//! }
//!
//! assert_eq!(Either::of(5).chain(positive), Either::Right(5));
//! assert_eq!(
//!     Either::of(-1).chain(positive),
//!     Either::Left("-1 is not positive".to_string())
//! );
//!
//! let nested: Either<String, Either<String, i32>> = Either::of(Either::of(7));
//! assert_eq!(nested.join(), Either::Right(7));
//! ```

use super::applicative::Applicative;

/// An applicative whose next step can depend on the previous value.
pub trait Monad: Applicative {
    /// Feeds the wrapped value to `function`, which returns the next wrapper.
    ///
    /// Short-circuiting wrappers return themselves without invoking
    /// `function`. For `Task`, the task returned by `function` is not forked
    /// until `self` resolves.
    fn chain<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static;

    /// Sequences two computations, keeping the second value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adequate::control::Maybe;
    /// use adequate::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::of(1).then(Maybe::of("next")), Maybe::of("next"));
    /// assert!(Maybe::<i32>::nothing().then(Maybe::of("next")).is_nothing());
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Clone + 'static,
        B: 'static,
    {
        self.chain(move |_| next.clone())
    }
}

/// Flattening one level of nesting: `W<W<A>>` into `W<A>`.
///
/// Kept apart from [`Monad`] because the nested shape is a property of the
/// implementing type, not of a method's type parameters. Every implementation
/// is equivalent to `chain(identity)`.
pub trait Join: Monad {
    /// The wrapper with one level of nesting removed.
    type Flattened;

    /// Removes one level of nesting.
    fn join(self) -> Self::Flattened;
}
