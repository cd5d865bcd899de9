//! Task - a deferred computation settled through callbacks.
//!
//! A `Task<E, T>` wraps a fork function that receives two callbacks,
//! `reject(E)` and `resolve(T)`. Building a task runs nothing. Every
//! [`Task::fork`] is an independent run that settles exactly once: the first
//! call to either callback wins and any later call is dropped.
//!
//! Tasks are single-threaded (`Rc` inside, so `!Send`). Asynchronous fork
//! bodies register their callbacks with `tokio::task::spawn_local` and must
//! therefore run inside a `tokio::task::LocalSet`.
//!
//! There is no cancellation and no timeout: once forked, a task runs until
//! its body settles or is dropped. A panic inside a fork function is not
//! turned into a rejection.
//!
//! # Examples
//!
//! ```rust
//! use adequate::effect::Task;
//! use adequate::typeclass::{Functor, Monad};
//!
//! let incremented = Task::<String, i32>::of(3).map(|x| x + 1);
//! assert_eq!(incremented.run_sync(), Some(Ok(4)));
//!
//! let failed = Task::<&str, i32>::rejected("boom").map(|x| x + 1);
//! assert_eq!(failed.run_sync(), Some(Err("boom")));
//!
//! let chained = Task::<String, i32>::of(2).chain(|x| Task::of(x * 10));
//! chained.fork(
//!     |error| panic!("unexpected rejection: {error}"),
//!     |value| assert_eq!(value, 20),
//! );
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::typeclass::{Applicative, Functor, Join, Monad, TypeConstructor};

/// The failure callback handed to a fork function.
pub type Reject<E> = Rc<dyn Fn(E)>;

/// The success callback handed to a fork function.
pub type Resolve<T> = Rc<dyn Fn(T)>;

type Callbacks<E, T> = (Box<dyn FnOnce(E)>, Box<dyn FnOnce(T)>);

/// The callbacks of a single fork, taken out on first settlement.
struct Settlement<E, T> {
    callbacks: RefCell<Option<Callbacks<E, T>>>,
}

impl<E, T> Settlement<E, T> {
    fn new(callbacks: Callbacks<E, T>) -> Self {
        Self {
            callbacks: RefCell::new(Some(callbacks)),
        }
    }

    fn reject(&self, error: E) {
        let taken = self.callbacks.borrow_mut().take();
        match taken {
            Some((reject, _)) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(outcome = "rejected", "task settled");
                reject(error);
            }
            None => Self::already_settled("reject"),
        }
    }

    fn resolve(&self, value: T) {
        let taken = self.callbacks.borrow_mut().take();
        match taken {
            Some((_, resolve)) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(outcome = "resolved", "task settled");
                resolve(value);
            }
            None => Self::already_settled("resolve"),
        }
    }

    #[allow(unused_variables)]
    fn already_settled(callback: &'static str) {
        #[cfg(feature = "tracing")]
        tracing::warn!(callback, "task already settled; extra settlement dropped");
    }
}

/// A deferred computation that rejects with `E` or resolves with `T`.
pub struct Task<E, T> {
    run: Rc<dyn Fn(Reject<E>, Resolve<T>)>,
}

static_assertions::assert_not_impl_any!(Task<(), ()>: Send, Sync);

impl<E: 'static, T: 'static> Task<E, T> {
    /// Wraps a fork function.
    ///
    /// The function must call exactly one of `reject` or `resolve` exactly
    /// once per run; both callbacks are cheap to clone and may be moved into
    /// timers or other deferred work.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adequate::effect::Task;
    ///
    /// let parsed = Task::new(|reject, resolve| match "42".parse::<i32>() {
    ///     Ok(value) => resolve(value),
    ///     Err(error) => reject(error.to_string()),
    /// });
    /// assert_eq!(parsed.run_sync(), Some(Ok(42)));
    /// ```
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(Reject<E>, Resolve<T>) + 'static,
    {
        Self { run: Rc::new(run) }
    }

    /// A task whose fork resolves immediately with `value`.
    pub fn of(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move |_, resolve| resolve(value.clone()))
    }

    /// A task whose fork rejects immediately with `error`.
    pub fn rejected(error: E) -> Self
    where
        E: Clone,
    {
        Self::new(move |reject, _| reject(error.clone()))
    }

    /// Runs the task, delivering the outcome to exactly one of the callbacks.
    ///
    /// Each call is an independent run.
    pub fn fork<RJ, RS>(&self, reject: RJ, resolve: RS)
    where
        RJ: FnOnce(E) + 'static,
        RS: FnOnce(T) + 'static,
    {
        #[cfg(feature = "tracing")]
        tracing::trace!("task forked");

        let settlement: Rc<Settlement<E, T>> =
            Rc::new(Settlement::new((Box::new(reject), Box::new(resolve))));
        let on_reject = Rc::clone(&settlement);
        let on_resolve = settlement;
        (self.run)(
            Rc::new(move |error| on_reject.reject(error)),
            Rc::new(move |value| on_resolve.resolve(value)),
        );
    }

    /// Forks and returns the outcome if it settled before `fork` returned.
    ///
    /// `None` means the task is still pending, typically because its body
    /// waits on a timer.
    pub fn run_sync(&self) -> Option<Result<T, E>> {
        let outcome = Rc::new(RefCell::new(None));
        let on_reject = Rc::clone(&outcome);
        let on_resolve = Rc::clone(&outcome);
        self.fork(
            move |error| *on_reject.borrow_mut() = Some(Err(error)),
            move |value| *on_resolve.borrow_mut() = Some(Ok(value)),
        );
        let settled = outcome.borrow_mut().take();
        settled
    }

    /// Forks both tasks at once and applies the function from `self` to the
    /// value from `other` once both have resolved.
    ///
    /// Unlike [`Applicative::ap`], neither side waits for the other. The
    /// first rejection wins; the later outcome of the other side is ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adequate::effect::Task;
    ///
    /// let add = Task::<String, _>::of(|x: i32| x + 1);
    /// assert_eq!(add.ap_parallel(Task::of(41)).run_sync(), Some(Ok(42)));
    /// ```
    pub fn ap_parallel<B, C>(self, other: Task<E, B>) -> Task<E, C>
    where
        T: Fn(B) -> C,
        B: 'static,
        C: 'static,
    {
        Task::new(move |reject, resolve| {
            let state = Rc::new(RefCell::new(Parallel::<T, B>::default()));

            let function_failed = Rc::clone(&state);
            let function_ready = Rc::clone(&state);
            let function_reject = Rc::clone(&reject);
            let function_resolve = Rc::clone(&resolve);
            self.fork(
                move |error| {
                    if function_failed.borrow_mut().fail() {
                        function_reject(error);
                    }
                },
                move |function| {
                    let ready = function_ready.borrow_mut().offer_function(function);
                    if let Some((function, value)) = ready {
                        function_resolve(function(value));
                    }
                },
            );

            let value_failed = Rc::clone(&state);
            let value_ready = state;
            other.fork(
                move |error| {
                    if value_failed.borrow_mut().fail() {
                        reject(error);
                    }
                },
                move |value| {
                    let ready = value_ready.borrow_mut().offer_value(value);
                    if let Some((function, value)) = ready {
                        resolve(function(value));
                    }
                },
            );
        })
    }
}

/// Join point of [`Task::ap_parallel`].
struct Parallel<F, B> {
    function: Option<F>,
    value: Option<B>,
    failed: bool,
}

impl<F, B> Default for Parallel<F, B> {
    fn default() -> Self {
        Self {
            function: None,
            value: None,
            failed: false,
        }
    }
}

impl<F, B> Parallel<F, B> {
    /// Returns `true` only for the first failure.
    fn fail(&mut self) -> bool {
        let first = !self.failed;
        self.failed = true;
        first
    }

    fn offer_function(&mut self, function: F) -> Option<(F, B)> {
        if self.failed {
            return None;
        }
        match self.value.take() {
            Some(value) => Some((function, value)),
            None => {
                self.function = Some(function);
                None
            }
        }
    }

    fn offer_value(&mut self, value: B) -> Option<(F, B)> {
        if self.failed {
            return None;
        }
        match self.function.take() {
            Some(function) => Some((function, value)),
            None => {
                self.value = Some(value);
                None
            }
        }
    }
}

#[cfg(feature = "async")]
impl<E: 'static, T: 'static> Task<E, T> {
    /// A task that resolves with `value` after `duration`.
    ///
    /// The timer is spawned with `tokio::task::spawn_local`, so the fork must
    /// happen inside a `LocalSet`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use adequate::effect::Task;
    /// use std::time::Duration;
    ///
    /// let runtime = tokio::runtime::Builder::new_current_thread()
    ///     .enable_time()
    ///     .build()
    ///     .unwrap();
    /// let local = tokio::task::LocalSet::new();
    ///
    /// let outcome = local.block_on(&runtime, async {
    ///     Task::<String, _>::after(Duration::from_millis(5), "late").to_future().await
    /// });
    /// assert_eq!(outcome, Ok("late"));
    /// ```
    pub fn after(duration: std::time::Duration, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(move |_, resolve| {
            let value = value.clone();
            tokio::task::spawn_local(async move {
                tokio::time::sleep(duration).await;
                resolve(value);
            });
        })
    }

    /// A future that forks the task on first poll and yields its outcome.
    ///
    /// If the fork body drops both callbacks without settling, the future
    /// stays pending.
    pub fn to_future(&self) -> impl std::future::Future<Output = Result<T, E>> + use<E, T> {
        let task = self.clone();
        async move {
            let (sender, receiver) = futures::channel::oneshot::channel();
            let sender = Rc::new(RefCell::new(Some(sender)));
            let on_reject = Rc::clone(&sender);
            let on_resolve = sender;
            task.fork(
                move |error| {
                    if let Some(sender) = on_reject.borrow_mut().take() {
                        let _ = sender.send(Err(error));
                    }
                },
                move |value| {
                    if let Some(sender) = on_resolve.borrow_mut().take() {
                        let _ = sender.send(Ok(value));
                    }
                },
            );
            match receiver.await {
                Ok(outcome) => outcome,
                Err(futures::channel::oneshot::Canceled) => futures::future::pending().await,
            }
        }
    }
}

impl<E, T> Clone for Task<E, T> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<E, T> fmt::Debug for Task<E, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Task(<unforked>)")
    }
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<E, T> TypeConstructor for Task<E, T> {
    type Inner = T;
    type WithType<B> = Task<E, B>;
}

impl<E: 'static, T: 'static> Functor for Task<E, T> {
    /// Resolves with `function(value)`; a rejection passes through unchanged.
    fn map<B, F>(self, function: F) -> Task<E, B>
    where
        F: Fn(T) -> B + 'static,
        B: 'static,
    {
        let function = Rc::new(function);
        Task::new(move |reject, resolve| {
            let function = Rc::clone(&function);
            self.fork(move |error| reject(error), move |value| resolve(function(value)));
        })
    }
}

impl<E: 'static, T: 'static> Applicative for Task<E, T> {
    fn pure<B>(value: B) -> Task<E, B>
    where
        B: Clone + 'static,
    {
        Task::of(value)
    }

    /// Settles `self` first, then forks `other`. See [`Task::ap_parallel`]
    /// for the concurrent variant.
    fn ap<B, C>(self, other: Task<E, B>) -> Task<E, C>
    where
        T: Fn(B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        self.chain(move |function| other.clone().map(function))
    }
}

impl<E: 'static, T: 'static> Monad for Task<E, T> {
    /// Forks `function(value)` only after `self` resolves.
    fn chain<B, F>(self, function: F) -> Task<E, B>
    where
        F: Fn(T) -> Task<E, B> + 'static,
        B: 'static,
    {
        let function = Rc::new(function);
        Task::new(move |reject, resolve| {
            let function = Rc::clone(&function);
            let inner_reject = Rc::clone(&reject);
            self.fork(
                move |error| reject(error),
                move |value| {
                    function(value).fork(move |error| inner_reject(error), move |next| resolve(next));
                },
            );
        })
    }
}

impl<E: 'static, T: 'static> Join for Task<E, Task<E, T>> {
    type Flattened = Task<E, T>;

    fn join(self) -> Task<E, T> {
        self.chain(|inner| inner)
    }
}
