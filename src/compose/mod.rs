//! Function composition and currying.
//!
//! - [`compose!`]: right-to-left composition fixed at compile time
//! - [`compose_all`]: right-to-left composition of a runtime list
//! - [`curry!`]: typed currying of a closure or function (proc macro)
//! - [`curry`]: runtime currying over an explicit arity, with any grouping
//!   of arguments per call
//! - [`identity`]
//!
//! # Examples
//!
//! ## Composition
//!
//! ```
//! use adequate::compose;
//!
//! let trim = |text: &'static str| text.trim();
//! let shout = |text: &str| text.to_uppercase();
//! let exclaim = |text: String| text + "!";
//!
//! let announce = compose!(exclaim, shout, trim);
//! assert_eq!(announce("  hello "), "HELLO!");
//! ```
//!
//! ## Currying
//!
//! ```
//! use adequate::curry;
//!
//! let add3 = curry!(|a: i32, b: i32, c: i32| a + b + c);
//! let add_one = add3(1);
//! assert_eq!(add_one(2)(3), 6);
//! assert_eq!(add_one(10)(10), 21);
//! ```
//!
//! `curry!` rejects functions it cannot curry at compile time. A single
//! parameter:
//!
//! ```compile_fail
//! use adequate::curry;
//!
//! let increment = curry!(|x: i32| x + 1);
//! ```
//!
//! a named function without its arity:
//!
//! ```compile_fail
//! use adequate::curry;
//!
//! fn add(a: i32, b: i32) -> i32 { a + b }
//! let curried = curry!(add);
//! ```
//!
//! and an arity that disagrees with the closure:
//!
//! ```compile_fail
//! use adequate::curry;
//!
//! let add = curry!(|a: i32, b: i32| a + b, 3);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//!
//! [`curry!`]: crate::curry

mod compose_all;
mod compose_macro;
mod curry;
mod error;
mod utils;

pub use compose_all::{Composed, Step, compose_all};
pub use curry::{Applied, Curry, curry};
pub use error::ComposeError;
pub use utils::identity;

pub use crate::compose;
