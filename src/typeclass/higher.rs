//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] names the applied type (`Inner`) and the same
//! constructor applied to another type (`WithType<B>`), which is enough to
//! state `map`, `ap` and `chain` once for every wrapper in this crate.
//!
//! # Example
//!
//! ```rust
//! use adequate::control::Maybe;
//! use adequate::typeclass::TypeConstructor;
//!
//! fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
//! assert_inner::<Maybe<i32>>();
//!
//! // Re-applying the constructor keeps the wrapper and swaps the inner type.
//! type Named = <Maybe<i32> as TypeConstructor>::WithType<String>;
//! let named: Named = Maybe::of("five".to_string());
//! assert!(named.is_just());
//! ```

/// A type constructor applied to some type.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
pub trait TypeConstructor {
    /// The type this constructor is currently applied to.
    ///
    /// For `Either<L, R>` this is `R`: the left side is fixed.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
