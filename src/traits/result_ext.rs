//! Extension trait for recording stacks on `Result` errors.
//!
//! This module provides [`TraceResultExt`], which converts or wraps the
//! error of a `Result` into a [`TracedError`] captured at the call site,
//! without verbose `.map_err()` chains.
//!
//! # Examples
//!
//! ```
//! use stack_rail::traits::TraceResultExt;
//! use stack_rail::TracedError;
//!
//! fn load_config() -> Result<String, TracedError<std::io::Error>> {
//!     std::fs::read_to_string("no/such/config.toml").traced()
//! }
//!
//! let err = load_config().unwrap_err();
//! assert!(!err.stack().is_empty());
//! ```

use crate::traits::stack_carrier::ChainLink;
use crate::types::TracedError;

/// Extension trait for attaching call stacks to `Result` errors.
///
/// Every method captures at its caller, so the recorded stack starts at the
/// line that called `traced`/`wrap_err`, not inside this crate.
pub trait TraceResultExt<T, E> {
    /// Wraps the error in a [`TracedError`] carrying the caller's stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_rail::traits::TraceResultExt;
    ///
    /// let result: Result<(), &str> = Err("failed");
    /// let err = result.traced().unwrap_err();
    /// assert_eq!(*err.core_error(), "failed");
    /// ```
    fn traced(self) -> Result<T, TracedError<E>>;

    /// Wraps a stack-carrying error in a new [`TracedError`] with `message`,
    /// merging the two stacks.
    ///
    /// # Examples
    ///
    /// ```
    /// use stack_rail::traits::TraceResultExt;
    /// use stack_rail::TracedError;
    ///
    /// let inner: Result<(), TracedError<&str>> = Err(TracedError::new("disk full"));
    /// let err = inner.wrap_err("saving report").unwrap_err();
    /// assert_eq!(err.to_string(), "saving report: disk full");
    /// ```
    fn wrap_err<M>(self, message: M) -> Result<T, TracedError<M>>
    where
        E: ChainLink;

    /// Like [`wrap_err`](TraceResultExt::wrap_err), building the message only
    /// on the error path.
    fn wrap_err_with<M, F>(self, f: F) -> Result<T, TracedError<M>>
    where
        E: ChainLink,
        F: FnOnce() -> M;
}

impl<T, E> TraceResultExt<T, E> for Result<T, E> {
    #[inline(never)]
    fn traced(self) -> Result<T, TracedError<E>> {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(TracedError::with_skip(error, 1)),
        }
    }

    #[inline(never)]
    fn wrap_err<M>(self, message: M) -> Result<T, TracedError<M>>
    where
        E: ChainLink,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(TracedError::with_skip(message, 1).wrapping(error)),
        }
    }

    #[inline(never)]
    fn wrap_err_with<M, F>(self, f: F) -> Result<T, TracedError<M>>
    where
        E: ChainLink,
        F: FnOnce() -> M,
    {
        match self {
            Ok(value) => Ok(value),
            Err(error) => Err(TracedError::with_skip(f(), 1).wrapping(error)),
        }
    }
}
