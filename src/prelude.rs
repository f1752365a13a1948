//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use stack_rail::prelude::*;
//!
//! fn read_settings() -> TracedResult<String, std::io::Error> {
//!     std::fs::read_to_string("settings.toml").traced()
//! }
//!
//! if let Err(err) = read_settings() {
//!     println!("{err:#}");
//! }
//! ```

// Macros
pub use crate::{stack, stack_trace, traced};

// Core types
pub use crate::types::{Stack, StackFormatConfig, TracedError, TracedResult};

// Traits
pub use crate::traits::{StackCarrier, TraceResultExt};
pub use crate::types::StackFormatter;
