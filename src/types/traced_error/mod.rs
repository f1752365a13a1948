//! Error type that records where it was created.
//!
//! [`TracedError`] pairs any error value with the [`Stack`] captured when it
//! was built, and optionally with one wrapped error. Wrapping merges the
//! inner stack into the outer one so a chain prints each call site once.
//!
//! # Examples
//!
//! ```
//! use stack_rail::TracedError;
//!
//! #[inline(never)]
//! fn open() -> TracedError<&'static str> {
//!     TracedError::new("no such file")
//! }
//!
//! #[inline(never)]
//! fn load() -> TracedError<&'static str> {
//!     TracedError::wrap("loading config", open())
//! }
//!
//! let err = load();
//! assert_eq!(err.to_string(), "loading config: no such file");
//! assert!(!err.stack().is_empty());
//! ```
use crate::capture::capture;
use crate::traits::stack_carrier::{ChainLink, StackCarrier};
use crate::types::stack::Stack;
use crate::types::stack_formatter::{StackFormatConfig, StackFormatter};

mod traits;

/// Error wrapper that stores the original error, its creation stack and an
/// optional wrapped error.
#[must_use]
#[derive(Debug)]
pub struct TracedError<E> {
    pub(crate) core_error: E,
    pub(crate) stack: Stack,
    pub(crate) wrapped: Option<Box<dyn ChainLink>>,
}

impl<E> TracedError<E> {
    /// Creates an error whose stack starts at the caller.
    #[inline(never)]
    pub fn new(error: E) -> Self {
        Self::with_skip(error, 1)
    }

    /// Creates an error, hiding `skip` frames above this call.
    ///
    /// Helpers that build errors on behalf of their caller pass the number
    /// of helper frames so the stack starts at the real creation site.
    #[inline(never)]
    pub fn with_skip(error: E, skip: usize) -> Self {
        Self { core_error: error, stack: capture(skip + 1), wrapped: None }
    }

    /// Creates an error without capturing a stack.
    #[inline]
    pub fn untraced(error: E) -> Self {
        Self { core_error: error, stack: Stack::new(), wrapped: None }
    }

    /// Creates an error around an already captured stack.
    #[inline]
    pub fn from_parts(error: E, stack: Stack) -> Self {
        Self { core_error: error, stack, wrapped: None }
    }

    /// Creates an error at the caller that wraps `inner`, merging stacks.
    #[inline(never)]
    pub fn wrap<I>(error: E, inner: I) -> Self
    where
        I: ChainLink,
    {
        Self::with_skip(error, 1).wrapping(inner)
    }

    /// Attaches `inner` as the wrapped error and merges its stack into ours.
    pub fn wrapping<I>(mut self, inner: I) -> Self
    where
        I: ChainLink,
    {
        self.wrapped = Some(Box::new(inner));
        crate::merge::merge_wrapped(&mut self);
        self
    }

    /// Returns a reference to the underlying error.
    #[inline]
    pub fn core_error(&self) -> &E {
        &self.core_error
    }

    /// The stack recorded for this error, including call sites merged in
    /// from wrapped errors.
    #[inline]
    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    /// The wrapped error, if any.
    #[inline]
    pub fn wrapped_link(&self) -> Option<&dyn ChainLink> {
        self.wrapped.as_deref()
    }

    /// Consumes the error, returning the underlying core error.
    #[inline]
    pub fn into_core(self) -> E {
        self.core_error
    }

    /// Maps the core error while keeping the stack and wrapped error.
    #[inline]
    pub fn map_core<F, T>(self, f: F) -> TracedError<T>
    where
        F: FnOnce(E) -> T,
    {
        TracedError { core_error: f(self.core_error), stack: self.stack, wrapped: self.wrapped }
    }

    /// Renders this error's own stack with the default formatter.
    #[must_use]
    pub fn stack_trace(&self) -> String {
        StackFormatConfig::default().format(&self.stack)
    }

    /// Renders the message followed by every non-empty stack in the chain.
    ///
    /// After merging, only stacks that share no call path with their
    /// wrapper (for example errors created on another thread) remain on
    /// inner errors.
    #[must_use]
    pub fn report(&self) -> String
    where
        E: core::fmt::Display,
    {
        let config = StackFormatConfig::indented();
        let mut result = self.to_string();

        let mut link: Option<&dyn StackCarrier> = Some(self);
        while let Some(carrier) = link {
            if let Some(stack) = carrier.stack().filter(|stack| !stack.is_empty()) {
                let text = config.format(stack);
                if !text.is_empty() {
                    result.push_str(&config.separator);
                    result.push_str(&text);
                }
            }
            link = carrier.wrapped();
        }
        result
    }
}
