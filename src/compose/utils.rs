//! Small combinators used across pipelines.

/// Returns its argument unchanged.
///
/// The unit of composition, and the function behind `join` (`chain(identity)`)
/// and `sequence` (`traverse(of, identity)`).
///
/// # Examples
///
/// ```
/// use adequate::compose;
/// use adequate::compose::identity;
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// assert_eq!(compose!(identity, double)(5), double(5));
/// assert_eq!(compose!(double, identity)(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}
