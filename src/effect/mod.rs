//! Deferred computations.
//!
//! - [`IO`]: a repeatable synchronous effect, run with `unsafe_perform_io`
//! - [`Task`]: a computation settled through `(reject, resolve)` callbacks,
//!   run with `fork`
//!
//! Neither does anything when built or combined. `IO` has no failure
//! channel; `Task` carries failures on its reject side and short-circuits
//! on them.
//!
//! # Examples
//!
//! ```rust
//! use adequate::effect::{IO, Task};
//! use adequate::typeclass::{Functor, Monad};
//!
//! let read_config = IO::of("port=8080").map(|line| line.len());
//! assert_eq!(read_config.unsafe_perform_io(), 9);
//!
//! let lookup = |port: u16| -> Task<String, u16> {
//!     if port > 1024 { Task::of(port) } else { Task::rejected(format!("{port} is privileged")) }
//! };
//! assert_eq!(Task::of(80).chain(lookup).run_sync(), Some(Err("80 is privileged".to_string())));
//! ```

mod io;
mod task;

pub use io::IO;
pub use task::{Reject, Resolve, Task};
