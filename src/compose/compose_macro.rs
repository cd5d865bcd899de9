//! The `compose!` macro.

/// Composes functions right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`: the rightmost function receives
/// the input, every other function receives the result of the one to its
/// right.
///
/// The rightmost function may take a tuple when the pipeline starts from
/// several values:
///
/// ```
/// use adequate::compose;
///
/// let area = |(width, height): (u32, u32)| width * height;
/// let describe = |square_meters: u32| format!("{square_meters} m2");
///
/// let describe_room = compose!(describe, area);
/// assert_eq!(describe_room((3, 4)), "12 m2");
/// ```
///
/// Composing wrapper-aware steps reads bottom-up, like a pipeline:
///
/// ```
/// use adequate::compose;
/// use adequate::control::Either;
/// use adequate::typeclass::{Functor, Monad};
///
/// fn parse(text: &str) -> Either<String, i32> {
///     text.parse::<i32>().map_err(|error| error.to_string()).into()
/// }
///
/// let doubled = compose!(
///     |parsed: Either<String, i32>| parsed.map(|x| x * 2),
///     parse
/// );
/// assert_eq!(doubled("21"), Either::Right(42));
/// assert!(doubled("x").is_left());
/// ```
///
/// At least one function is required; an empty composition does not compile:
///
/// ```compile_fail
/// use adequate::compose;
///
/// let nothing = compose!();
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $inner_function:expr $(,)?) => {{
        let outer = $outer_function;
        let inner = $inner_function;
        move |input| outer(inner(input))
    }};

    // compose!(f, g, h, ..) = compose!(f, compose!(g, h, ..))
    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let outer = $outer_function;
        let inner = $crate::compose!($($remaining_functions),+);
        move |input| outer(inner(input))
    }};
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    #[rstest]
    fn single_function_is_returned_unchanged() {
        let double = |x: i32| x * 2;
        assert_eq!(compose!(double)(5), 10);
    }

    #[rstest]
    fn rightmost_function_runs_first() {
        let append_a = |text: String| text + "a";
        let append_b = |text: String| text + "b";
        let append_c = |text: String| text + "c";
        assert_eq!(compose!(append_a, append_b, append_c)(String::new()), "cba");
    }

    #[rstest]
    fn composition_is_reusable() {
        let composed = compose!(|x: i32| x + 1, |x: i32| x * 2);
        assert_eq!(composed(1), 3);
        assert_eq!(composed(2), 5);
    }
}
