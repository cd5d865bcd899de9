//! Runtime composition of a list of endomorphisms.
//!
//! [`compose!`](crate::compose) fixes the functions at compile time. When the
//! steps are only known at runtime (read from configuration, collected in a
//! loop) they are boxed into a `Vec` and composed with [`compose_all`].

use super::error::ComposeError;

/// A boxed step of a runtime composition.
pub type Step<A> = Box<dyn Fn(A) -> A>;

/// The result of [`compose_all`]: the steps applied right to left.
pub struct Composed<A> {
    steps: Vec<Step<A>>,
}

/// Composes `steps` right to left: the last step receives the input.
///
/// # Errors
///
/// Returns [`ComposeError::Empty`] when `steps` is empty.
///
/// # Examples
///
/// ```rust
/// use adequate::compose::compose_all;
///
/// let pipeline = compose_all::<i32>(vec![
///     Box::new(|x: i32| x + 1),
///     Box::new(|x: i32| x * 2),
/// ])
/// .unwrap();
/// assert_eq!(pipeline.call(5), 11);
/// ```
pub fn compose_all<A>(steps: Vec<Step<A>>) -> Result<Composed<A>, ComposeError> {
    if steps.is_empty() {
        return Err(ComposeError::Empty);
    }
    Ok(Composed { steps })
}

impl<A> Composed<A> {
    /// Threads `input` through every step, last step first.
    pub fn call(&self, input: A) -> A {
        self.steps.iter().rev().fold(input, |value, step| step(value))
    }

    /// Number of composed steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`, since [`compose_all`] refuses an empty list.
    ///
    /// Present as the companion of [`len`](Self::len) for
    /// `clippy::len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl<A> std::fmt::Debug for Composed<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Composed")
            .field("steps", &self.steps.len())
            .finish()
    }
}

impl<A: 'static> Composed<A> {
    /// Turns the composition into a plain closure, for use with `map`.
    pub fn into_fn(self) -> impl Fn(A) -> A {
        move |input| self.call(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_list_is_rejected() {
        assert!(matches!(compose_all::<String>(Vec::new()), Err(ComposeError::Empty)));
    }

    #[rstest]
    fn steps_run_right_to_left() {
        let composed = compose_all::<String>(vec![
            Box::new(|text: String| text + "a"),
            Box::new(|text: String| text + "b"),
        ])
        .unwrap();
        assert_eq!(composed.call(String::new()), "ba");
        assert_eq!(composed.len(), 2);
        assert!(!composed.is_empty());
    }

    #[rstest]
    fn single_step_is_that_step() {
        let composed = compose_all::<i32>(vec![Box::new(|x: i32| x * 3)]).unwrap();
        assert_eq!(composed.into_fn()(4), 12);
    }
}
