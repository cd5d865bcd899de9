//! Functor type class - mapping over a wrapped value.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.map(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.map(f).map(g) == fa.map(|x| g(f(x)))
//! ```
//!
//! For `IO` and `Task`, "==" means: performing or forking both sides yields
//! the same outcome.
//!
//! # Examples
//!
//! ```rust
//! use adequate::control::{Either, Maybe};
//! use adequate::typeclass::Functor;
//!
//! let doubled: Either<String, i32> = Either::of(5).map(|x| x * 2);
//! assert_eq!(doubled, Either::Right(10));
//!
//! let absent: Maybe<i32> = Maybe::nothing();
//! assert!(absent.map(|x| x + 1).is_nothing());
//! ```

use super::higher::TypeConstructor;

/// A wrapper whose inner value can be transformed without changing its shape.
///
/// The mapping function is `Fn` rather than `FnOnce` because `IO` and `Task`
/// are re-runnable descriptions: every `unsafe_perform_io` or `fork` applies
/// the function again.
///
/// Short-circuiting wrappers (`Left`, nothing, a rejected task) return
/// themselves and never invoke the function.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the wrapped value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adequate::effect::IO;
    /// use adequate::typeclass::Functor;
    ///
    /// let io = IO::of(21).map(|x| x * 2);
    /// assert_eq!(io.unsafe_perform_io(), 42);
    /// ```
    fn map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the wrapped value with a constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adequate::control::Maybe;
    /// use adequate::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::of(5).replace("five"), Maybe::of("five"));
    /// assert!(Maybe::<i32>::nothing().replace("five").is_nothing());
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + 'static,
    {
        self.map(move |_| value.clone())
    }
}
