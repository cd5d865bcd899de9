//! Capability traits shared by every wrapper in this crate.
//!
//! - [`TypeConstructor`]: the GAT-based stand-in for higher-kinded types
//! - [`Functor`]: `map`
//! - [`Applicative`]: `pure` and `ap`
//! - [`Monad`]: `chain`
//! - [`Join`]: `join`
//!
//! `Either`, `Maybe`, `IO` and `Task` implement all of them with the same
//! method names and their own short-circuit behaviour, so the free functions
//! in `pointfree` can be written once.
//!
//! # Example
//!
//! ```rust
//! use adequate::control::Maybe;
//! use adequate::effect::IO;
//! use adequate::typeclass::Functor;
//!
//! fn increment<W>(wrapper: W) -> W::WithType<i32>
//! where
//!     W: Functor<Inner = i32>,
//! {
//!     wrapper.map(|x| x + 1)
//! }
//!
//! assert_eq!(increment(Maybe::of(1)), Maybe::of(2));
//! assert_eq!(increment(IO::of(1)).unsafe_perform_io(), 2);
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::{Join, Monad};
