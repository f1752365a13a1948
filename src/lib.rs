//! Call stacks for chained errors: capture, merge, print.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `stack_rail::*` or pick focused pieces as needed.
//!
//! - [`capture`] records the current call stack as program counters.
//! - [`merge_stacks`] folds the stack of a wrapped error into its wrapper,
//!   keeping the shared call path once.
//! - [`StackFormatter`] renders a stack innermost-first, one line per call
//!   site, with shortened names and collapsed toolchain frames.
//!
//! # Examples
//!
//! ## Wrapping Errors
//!
//! ```
//! use stack_rail::{StackCarrier, TracedError};
//!
//! #[inline(never)]
//! fn query() -> TracedError<&'static str> {
//!     TracedError::new("connection reset")
//! }
//!
//! #[inline(never)]
//! fn handler() -> TracedError<&'static str> {
//!     TracedError::wrap("loading user", query())
//! }
//!
//! let err = handler();
//! assert_eq!(err.to_string(), "loading user: connection reset");
//!
//! // The wrapped error's stack was merged into the outer one.
//! let inner = err.wrapped_link().unwrap();
//! assert!(inner.stack().unwrap().is_empty());
//! println!("{err:#}");
//! ```
//!
//! ## Formatting A Synthetic Stack
//!
//! ```
//! use stack_rail::traits::KeepAll;
//! use stack_rail::{Frame, ProgramCounter, Stack, StackFormatConfig, StackFormatter};
//!
//! let frames = [
//!     Frame::new("app/server.Run", "server.go", 10),
//!     Frame::new("app/server.handle", "server.go", 42),
//! ];
//! let resolver = |pc: ProgramCounter| frames[pc.addr()].clone();
//! let stack = Stack::from_pcs(&[ProgramCounter::new(1), ProgramCounter::new(0)]);
//!
//! let text = StackFormatConfig::default().format_using(&stack, None, &resolver, KeepAll::new);
//! assert_eq!(text, "server.go:42: ...handle\nserver.go:10: app/server.Run");
//! ```

/// Stack capture
pub mod capture;
/// Macros for call-site capture
pub mod macros;
/// Merging wrapped error stacks
pub mod merge;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Capability traits for errors, resolvers and frame policies
pub mod traits;
/// Stack, frame, formatter and error types
pub mod types;

/// Advanced API level for library authors
pub mod advanced;

pub use crate::capture::{capture, current_stack, MAX_DEPTH};
pub use crate::merge::{merge_stacks, merge_wrapped};
pub use traits::*;
pub use types::{
    BoxedTracedError, Frame, FrameResolver, ProgramCounter, Stack, StackFormatConfig,
    StackFormatter, SymbolResolver, TracedError, TracedResult,
};
