//! Advanced API level for library authors.
//!
//! These items are for integrating custom error types, symbol tables or
//! frame policies with the capture/merge/format machinery.

// Error chain integration
pub use crate::merge::{merge_stacks, merge_wrapped};
pub use crate::traits::{ChainLink, StackCarrier};

// Resolution
pub use crate::types::{Frame, FrameResolver, ProgramCounter, SymbolResolver};

// Formatting policy
pub use crate::traits::{FrameClassifier, KeepAll, SourceRootClassifier};
pub use crate::types::stack_formatter::DEFAULT_NAME_SEPARATORS;
