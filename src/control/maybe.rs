//! Maybe type - a value that may be absent.
//!
//! `Maybe<T>` wraps an `Option<T>`. `None` is the single "nothing" marker, so
//! an absent value and a deliberately stored `()` can never be confused, and
//! `Maybe::of(x)` for any `x` is always a just value.
//!
//! Every capability method short-circuits on nothing.
//!
//! # Examples
//!
//! ```rust
//! use adequate::control::Maybe;
//! use adequate::typeclass::{Functor, Monad};
//!
//! let street = Maybe::of("Sesame Street")
//!     .map(|name| name.len())
//!     .chain(|length| if length > 3 { Maybe::of(length) } else { Maybe::nothing() });
//! assert_eq!(street, Maybe::of(13));
//!
//! let missing: Maybe<&str> = Maybe::nothing();
//! assert_eq!(missing.map(str::len).maybe(0, |length| length), 0);
//! ```

use crate::typeclass::{Applicative, Functor, Join, Monad, TypeConstructor};

/// An optional value with the same capability surface as the other wrappers.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Maybe<T>(Option<T>);

impl<T> Maybe<T> {
    /// Lifts a value. The result is never nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adequate::control::Maybe;
    ///
    /// assert!(Maybe::of(()).is_just());
    /// ```
    #[inline]
    pub const fn of(value: T) -> Self {
        Self(Some(value))
    }

    /// The absent value.
    #[inline]
    pub const fn nothing() -> Self {
        Self(None)
    }

    /// Builds a `Maybe` from an `Option`, `None` becoming nothing.
    #[inline]
    pub fn from_option(option: Option<T>) -> Self {
        Self(option)
    }

    /// Returns `true` when no value is held.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        self.0.is_none()
    }

    /// Returns `true` when a value is held.
    #[inline]
    pub const fn is_just(&self) -> bool {
        self.0.is_some()
    }

    /// Borrows the held value, if any.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match &self.0 {
            Some(value) => Maybe(Some(value)),
            None => Maybe(None),
        }
    }

    /// Converts back into an `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        self.0
    }

    /// Eliminates the `Maybe`: `default` when nothing, `function(value)` otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adequate::control::Maybe;
    ///
    /// assert_eq!(Maybe::of(20).maybe(0, |x| x + 1), 21);
    /// assert_eq!(Maybe::<i32>::nothing().maybe(0, |x| x + 1), 0);
    /// ```
    #[inline]
    pub fn maybe<B, F>(self, default: B, function: F) -> B
    where
        F: FnOnce(T) -> B,
    {
        match self.0 {
            Some(value) => function(value),
            None => default,
        }
    }

    /// Runs `function` on the held value and turns the nesting inside out.
    ///
    /// Nothing never calls `function` and is lifted with `of` instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adequate::control::{Either, Maybe};
    ///
    /// let parse = |text: &str| -> Either<String, i32> {
    ///     text.parse::<i32>().map_err(|_| format!("{text} is not a number")).into()
    /// };
    ///
    /// assert_eq!(Maybe::of("12").traverse(Either::of, parse), Either::Right(Maybe::of(12)));
    /// assert_eq!(
    ///     Maybe::<&str>::nothing().traverse(Either::of, parse),
    ///     Either::Right(Maybe::nothing())
    /// );
    /// ```
    pub fn traverse<G, B, F, P>(self, of: P, function: F) -> G::WithType<Maybe<B>>
    where
        G: Functor<Inner = B>,
        F: FnOnce(T) -> G,
        P: FnOnce(Maybe<B>) -> G::WithType<Maybe<B>>,
        B: 'static,
    {
        match self.0 {
            Some(value) => function(value).map(Maybe::<B>::of),
            None => of(Maybe::nothing()),
        }
    }

    /// Swaps a `Maybe` holding a wrapper into that wrapper holding a `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adequate::control::{Either, Maybe};
    ///
    /// let nested: Maybe<Either<String, i32>> = Maybe::of(Either::Left("bad".to_string()));
    /// assert_eq!(nested.sequence(Either::of), Either::Left("bad".to_string()));
    /// ```
    pub fn sequence<B, P>(self, of: P) -> T::WithType<Maybe<B>>
    where
        T: Functor<Inner = B>,
        P: FnOnce(Maybe<B>) -> T::WithType<Maybe<B>>,
        B: 'static,
    {
        self.traverse(of, |inner| inner)
    }
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: Fn(T) -> B + 'static,
        B: 'static,
    {
        Maybe(self.0.map(function))
    }
}

impl<T> Applicative for Maybe<T> {
    #[inline]
    fn pure<B>(value: B) -> Maybe<B>
    where
        B: Clone + 'static,
    {
        Maybe::of(value)
    }

    #[inline]
    fn ap<B, C>(self, other: Maybe<B>) -> Maybe<C>
    where
        T: Fn(B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        match self.0 {
            Some(function) => other.map(function),
            None => Maybe::nothing(),
        }
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn chain<B, F>(self, function: F) -> Maybe<B>
    where
        F: Fn(T) -> Maybe<B> + 'static,
        B: 'static,
    {
        match self.0 {
            Some(value) => function(value),
            None => Maybe::nothing(),
        }
    }
}

impl<T> Join for Maybe<Maybe<T>> {
    type Flattened = Maybe<T>;

    #[inline]
    fn join(self) -> Maybe<T> {
        self.0.unwrap_or(Maybe(None))
    }
}

impl<T> Default for Maybe<T> {
    /// Nothing.
    #[inline]
    fn default() -> Self {
        Self(None)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(option: Option<T>) -> Self {
        Self(option)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.0
    }
}
