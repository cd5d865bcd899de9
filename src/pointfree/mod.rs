//! Curried free functions over the capability traits.
//!
//! Each function takes its configuration first and returns a closure that
//! waits for the wrapper, so pipelines can be written without naming the
//! data:
//!
//! ```rust
//! use adequate::compose;
//! use adequate::control::{Either, Maybe};
//! use adequate::effect::IO;
//! use adequate::pointfree::{chain, map};
//!
//! let half = |x: i32| if x % 2 == 0 { Maybe::of(x / 2) } else { Maybe::nothing() };
//! let quarter = compose!(chain(half), chain(half));
//! assert_eq!(quarter(Maybe::of(12)), Maybe::of(3));
//! assert!(quarter(Maybe::of(6)).is_nothing());
//!
//! // The same `map` works on every wrapper.
//! assert_eq!(map(|x: i32| x + 1)(Either::<String, i32>::of(1)), Either::Right(2));
//! assert_eq!(map(|x: i32| x + 1)(IO::of(1)).unsafe_perform_io(), 2);
//! ```

mod property;

use std::rc::Rc;

use crate::control::{Either, Maybe};
use crate::typeclass::{Applicative, Functor, Join, Monad};

pub use property::{Lookup, prop, safe_prop};

/// `map(function)(wrapper)` is `wrapper.map(function)`.
pub fn map<W, B, F>(function: F) -> impl Fn(W) -> W::WithType<B>
where
    W: Functor,
    F: Fn(W::Inner) -> B + 'static,
    B: 'static,
{
    let function = Rc::new(function);
    move |wrapper| {
        let function = Rc::clone(&function);
        wrapper.map(move |inner| function(inner))
    }
}

/// `chain(function)(wrapper)` is `wrapper.chain(function)`.
pub fn chain<W, B, F>(function: F) -> impl Fn(W) -> W::WithType<B>
where
    W: Monad,
    F: Fn(W::Inner) -> W::WithType<B> + 'static,
    B: 'static,
{
    let function = Rc::new(function);
    move |wrapper| {
        let function = Rc::clone(&function);
        wrapper.chain(move |inner| function(inner))
    }
}

/// `ap(wrapped_function)(wrapper)` is `wrapped_function.ap(wrapper)`.
///
/// # Examples
///
/// ```rust
/// use adequate::control::Maybe;
/// use adequate::pointfree::ap;
///
/// let apply_double = ap(Maybe::of(|x: i32| x * 2));
/// assert_eq!(apply_double(Maybe::of(4)), Maybe::of(8));
/// assert!(apply_double(Maybe::nothing()).is_nothing());
/// ```
pub fn ap<W, B, C>(wrapped_function: W) -> impl Fn(W::WithType<B>) -> W::WithType<C>
where
    W: Applicative + Clone,
    W::Inner: Fn(B) -> C + 'static,
    B: 'static,
    C: 'static,
{
    move |wrapper| wrapped_function.clone().ap(wrapper)
}

/// `join(wrapper)` is `wrapper.join()`.
pub fn join<W: Join>(wrapper: W) -> W::Flattened {
    wrapper.join()
}

/// Folds an [`Either`]: `on_left` for a failure, `on_right` for a success.
///
/// # Examples
///
/// ```rust
/// use adequate::control::Either;
/// use adequate::pointfree::either;
///
/// let report = either(|error: String| format!("error: {error}"), |value: i32| format!("ok: {value}"));
/// assert_eq!(report(Either::of(1)), "ok: 1");
/// assert_eq!(report(Either::Left("bad".to_string())), "error: bad");
/// ```
pub fn either<L, R, T, F, G>(on_left: F, on_right: G) -> impl Fn(Either<L, R>) -> T
where
    F: Fn(L) -> T,
    G: Fn(R) -> T,
{
    move |value| value.either(&on_left, &on_right)
}

/// Folds a [`Maybe`]: `default` when nothing, `function(value)` otherwise.
pub fn maybe<T, B, F>(default: B, function: F) -> impl Fn(Maybe<T>) -> B
where
    B: Clone,
    F: Fn(T) -> B,
{
    move |value| value.maybe(default.clone(), &function)
}
