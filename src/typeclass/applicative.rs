//! Applicative type class - applying a wrapped function to a wrapped value.
//!
//! `Applicative` extends [`Functor`] with:
//!
//! - `pure`: lifting a plain value into the wrapper (the pointed `of`)
//! - `ap`: applying the function held by `self` to the value held by another
//!   wrapper of the same kind
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(|x| x).ap(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).ap(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.ap(pure(y)) == pure(|f| f(y)).ap(u)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use adequate::control::Either;
//! use adequate::typeclass::Applicative;
//!
//! let add_one: Either<String, fn(i32) -> i32> = Either::of(|x| x + 1);
//! assert_eq!(add_one.ap(Either::of(5)), Either::Right(6));
//!
//! let missing: Either<String, fn(i32) -> i32> = Either::Left("no function".to_string());
//! assert_eq!(missing.ap(Either::of(5)), Either::Left("no function".to_string()));
//! ```

use super::functor::Functor;

/// A functor that can lift plain values and apply wrapped functions.
///
/// For `IO` and `Task`, `ap` is built from `chain`, so `self` runs (or
/// settles) before `other` starts. This ordering is part of the contract.
pub trait Applicative: Functor {
    /// Lifts a plain value into the wrapper.
    ///
    /// The value must be `Clone` because `IO` and `Task` hand it out again on
    /// every run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adequate::control::Maybe;
    /// use adequate::typeclass::Applicative;
    ///
    /// let lifted: Maybe<i32> = <Maybe<()>>::pure(42);
    /// assert_eq!(lifted, Maybe::of(42));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>
    where
        B: Clone + 'static;

    /// Applies the function held by `self` to the value held by `other`.
    ///
    /// Any short-circuiting wrapper on either side short-circuits the result;
    /// when both sides short-circuit, `self` wins.
    fn ap<B, C>(self, other: Self::WithType<B>) -> Self::WithType<C>
    where
        Self: Sized,
        Self::Inner: Fn(B) -> C + 'static,
        B: 'static,
        C: 'static;
}
