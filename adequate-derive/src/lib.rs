//! Procedural macros for `adequate`.
//!
//! - [`curry!`]: turns a closure or function of two or more parameters into
//!   a chain of single-argument closures
//!
//! Use the macro through the `adequate` crate, which re-exports it.
//!
//! ```rust,ignore
//! use adequate::curry;
//!
//! let volume = curry!(|width: u32, height: u32, depth: u32| width * height * depth);
//! let base = volume(2)(3);
//! assert_eq!(base(4), 24);
//! assert_eq!(base(10), 60);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curry;

use proc_macro::TokenStream;

/// Curries a closure or function of two or more parameters.
///
/// # Forms
///
/// - `curry!(|a: A, b: B| body)`: the arity is the closure's parameter count
/// - `curry!(function, n)`: any callable expression with an explicit arity
///
/// Every returned closure is `Fn`, so partial applications can be reused.
/// Captured arguments must be `Clone`; they are cloned when the last argument
/// arrives.
///
/// # Compile Errors
///
/// - fewer than two parameters
/// - a non-closure without an arity
/// - an arity that disagrees with the closure's parameter count
///
/// # Example
///
/// ```rust,ignore
/// use adequate::curry;
///
/// fn greet(greeting: &str, name: String) -> String {
///     format!("{greeting}, {name}!")
/// }
///
/// let hello = curry!(greet, 2)("Hello");
/// assert_eq!(hello("Ada".to_string()), "Hello, Ada!");
/// assert_eq!(hello("Grace".to_string()), "Hello, Grace!");
/// ```
#[proc_macro]
pub fn curry(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as curry::CurryInput);
    curry::expand(&input).into()
}
