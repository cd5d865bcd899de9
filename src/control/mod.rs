//! Pure wrappers for failure and absence.
//!
//! - [`Either`]: a `Left` failure or a `Right` success
//! - [`Maybe`]: a value or nothing
//!
//! Both implement the capability traits from [`crate::typeclass`] and
//! short-circuit on their failure/absence case.
//!
//! # Examples
//!
//! ```rust
//! use adequate::control::{Either, Maybe};
//! use adequate::typeclass::Monad;
//!
//! fn find_user(id: u32) -> Maybe<&'static str> {
//!     if id == 1 { Maybe::of("ada") } else { Maybe::nothing() }
//! }
//!
//! fn require(name: Maybe<&'static str>) -> Either<String, &'static str> {
//!     name.maybe(Either::Left("no such user".to_string()), Either::of)
//! }
//!
//! assert_eq!(require(find_user(1)), Either::Right("ada"));
//! assert_eq!(require(find_user(2)), Either::Left("no such user".to_string()));
//! assert_eq!(find_user(1).chain(|_| find_user(2)), Maybe::nothing());
//! ```

mod either;
mod maybe;

pub use either::Either;
pub use maybe::Maybe;
