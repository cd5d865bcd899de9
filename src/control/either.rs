//! Either type - a computation that may have failed.
//!
//! `Either<L, R>` holds exactly one of `Left(L)` or `Right(R)`. By convention
//! `Left` carries a failure and `Right` a success. Every capability method
//! (`map`, `ap`, `chain`, `join`) short-circuits on `Left`: the same `Left`
//! flows through and none of the supplied functions run.
//!
//! # Examples
//!
//! ```rust
//! use adequate::control::Either;
//! use adequate::typeclass::{Functor, Monad};
//!
//! fn validate_email(email: &str) -> Either<String, String> {
//!     if email.len() > 6 {
//!         Either::of(email.to_string())
//!     } else {
//!         Either::Left("Email must be more than 6 chars long".to_string())
//!     }
//! }
//!
//! let accepted = validate_email("d@dd.de").map(|email| email.to_uppercase());
//! assert_eq!(accepted, Either::Right("D@DD.DE".to_string()));
//!
//! let rejected = validate_email("d@d.de").map(|email| email.to_uppercase());
//! assert!(rejected.is_left());
//!
//! // Unwrap at the boundary.
//! let message = rejected.either(|error| error, |email| format!("welcome {email}"));
//! assert_eq!(message, "Email must be more than 6 chars long");
//! ```
//!
//! `of` belongs to the type, not to a variant. The variants are not types, so
//! asking a variant for `of` is rejected by the compiler:
//!
//! ```rust,compile_fail
//! use adequate::control::Either;
//!
//! let value: Either<String, i32> = Either::Left::of(5);
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Functor, Join, Monad, TypeConstructor};

/// A value that is either a `Left` (failure) or a `Right` (success).
///
/// # Examples
///
/// ```rust
/// use adequate::control::Either;
/// use adequate::typeclass::Functor;
///
/// let failure: Either<String, i32> = Either::Left("bad".to_string());
/// assert_eq!(failure.map(|x| x * 2), Either::Left("bad".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The failure side; sticky through every capability method.
    Left(L),
    /// The success side.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Lifts a value into the success side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adequate::control::Either;
    ///
    /// let value: Either<String, i32> = Either::of(5);
    /// assert_eq!(value, Either::Right(5));
    /// ```
    #[inline]
    pub const fn of(value: R) -> Self {
        Self::Right(value)
    }

    /// Returns `true` for `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts into the left value, if any.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into the right value, if any.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the left value, if any.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Borrows the right value, if any.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Transforms the failure payload, leaving `Right` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adequate::control::Either;
    ///
    /// let failure: Either<&str, i32> = Either::Left("bad");
    /// assert_eq!(failure.map_left(str::len), Either::Left(3));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Eliminates the `Either` at the boundary of a pipeline.
    ///
    /// `on_left` handles the failure payload, `on_right` the success value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adequate::control::Either;
    ///
    /// let right: Either<String, i32> = Either::of(42);
    /// assert_eq!(right.either(|error| error.len() as i32, |value| value), 42);
    /// ```
    #[inline]
    pub fn either<T, F, G>(self, on_left: F, on_right: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Runs `function` on the success value and turns the nesting inside out.
    ///
    /// `function` returns some other wrapper `G`; the result is that wrapper
    /// holding an `Either`. A `Left` never calls `function` and is lifted with
    /// `of` instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adequate::control::{Either, Maybe};
    ///
    /// let half = |x: i32| if x % 2 == 0 { Maybe::of(x / 2) } else { Maybe::nothing() };
    ///
    /// let even: Either<String, i32> = Either::of(4);
    /// assert_eq!(even.traverse(Maybe::of, half), Maybe::of(Either::Right(2)));
    ///
    /// let failed: Either<String, i32> = Either::Left("bad".to_string());
    /// assert_eq!(
    ///     failed.traverse(Maybe::of, half),
    ///     Maybe::of(Either::Left("bad".to_string()))
    /// );
    /// ```
    pub fn traverse<G, B, F, P>(self, of: P, function: F) -> G::WithType<Either<L, B>>
    where
        G: Functor<Inner = B>,
        F: FnOnce(R) -> G,
        P: FnOnce(Either<L, B>) -> G::WithType<Either<L, B>>,
        L: 'static,
        B: 'static,
    {
        match self {
            Self::Left(value) => of(Either::Left(value)),
            Self::Right(value) => function(value).map(Either::<L, B>::Right),
        }
    }

    /// Swaps an `Either` holding a wrapper into that wrapper holding an `Either`.
    ///
    /// Equivalent to `traverse(of, identity)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adequate::control::{Either, Maybe};
    ///
    /// let nested: Either<String, Maybe<i32>> = Either::of(Maybe::of(3));
    /// assert_eq!(nested.sequence(Maybe::of), Maybe::of(Either::Right(3)));
    /// ```
    pub fn sequence<B, P>(self, of: P) -> R::WithType<Either<L, B>>
    where
        R: Functor<Inner = B>,
        P: FnOnce(Either<L, B>) -> R::WithType<Either<L, B>>,
        L: 'static,
        B: 'static,
    {
        self.traverse(of, |inner| inner)
    }
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Functor for Either<L, R> {
    #[inline]
    fn map<B, F>(self, function: F) -> Either<L, B>
    where
        F: Fn(R) -> B + 'static,
        B: 'static,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }
}

impl<L, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B>
    where
        B: Clone + 'static,
    {
        Either::Right(value)
    }

    #[inline]
    fn ap<B, C>(self, other: Either<L, B>) -> Either<L, C>
    where
        R: Fn(B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(function) => other.map(function),
        }
    }
}

impl<L, R> Monad for Either<L, R> {
    #[inline]
    fn chain<B, F>(self, function: F) -> Either<L, B>
    where
        F: Fn(R) -> Either<L, B> + 'static,
        B: 'static,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }
}

impl<L, R> Join for Either<L, Either<L, R>> {
    type Flattened = Either<L, R>;

    #[inline]
    fn join(self) -> Either<L, R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(inner) => inner,
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok` becomes `Right`, `Err` becomes `Left`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
