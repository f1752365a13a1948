//! Stack, frame and error types.
//!
//! # Examples
//!
//! ```
//! use stack_rail::types::{StackFormatConfig, StackFormatter};
//! use stack_rail::TracedError;
//!
//! let err = TracedError::new("database connection failed");
//! let text = StackFormatConfig::indented().format(err.stack());
//! println!("{err}\n\t{text}");
//! ```

pub mod frame;
pub mod program_counter;
pub mod stack;
pub mod stack_formatter;
pub mod traced_error;

pub use frame::{Frame, FrameResolver, SymbolResolver};
pub use program_counter::ProgramCounter;
pub use stack::{Stack, StackVec};
pub use stack_formatter::{StackFormatConfig, StackFormatter, DEFAULT_SEPARATOR};
pub use traced_error::TracedError;

/// Result alias whose failures carry a call stack.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The core error type
pub type TracedResult<T, E> = Result<T, TracedError<E>>;

/// Boxed [`TracedError`] for reduced stack size.
pub type BoxedTracedError<E> = Box<TracedError<E>>;
