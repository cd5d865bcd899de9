//! # adequate
//!
//! Algebraic computation wrappers with a shared capability surface.
//!
//! ## Overview
//!
//! - **Capabilities**: `Functor`, `Applicative`, `Monad` and `Join` over a
//!   GAT-based type constructor
//! - **Wrappers**: `Either` for failure, `Maybe` for absence, `IO` for
//!   deferred effects and `Task` for callback-settled computations
//! - **Composition**: `compose!`, `curry!`, runtime `curry` and
//!   `compose_all`
//! - **Point-free helpers**: curried `map`, `chain`, `ap`, `join`, `prop` and
//!   `safe_prop` that work on any wrapper
//!
//! ## Feature Flags
//!
//! - `typeclass`: capability traits
//! - `compose`: composition and currying
//! - `control`: `Either`, `Maybe` and the point-free helpers
//! - `effect`: `IO` and `Task`
//! - `async`: `Task::after` and `Task::to_future` on tokio
//! - `serde`: `Serialize`/`Deserialize` for `Either` and `Maybe`
//! - `json`: `prop` over `serde_json::Value`
//! - `tracing`: events when tasks are forked and settled
//!
//! ## Example
//!
//! ```rust
//! use adequate::prelude::*;
//!
//! fn validate_email(email: String) -> Either<String, String> {
//!     if email.len() > 6 {
//!         Either::of(email)
//!     } else {
//!         Either::Left("Email must be more than 6 chars long".to_string())
//!     }
//! }
//!
//! let welcome = compose!(
//!     either(|error: String| error, |email: String| format!("welcome {email}")),
//!     map(|email: String| email.to_lowercase()),
//!     validate_email
//! );
//!
//! assert_eq!(welcome("Ada@Example.org".to_string()), "welcome ada@example.org");
//! assert_eq!(welcome("a@b.c".to_string()), "Email must be more than 6 chars long");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use adequate::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "compose")]
    pub use crate::curry;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "control")]
    pub use crate::pointfree::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "compose")]
pub use adequate_derive::curry;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "control")]
pub mod pointfree;

#[cfg(feature = "effect")]
pub mod effect;
