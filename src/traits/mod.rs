//! Capability traits this crate is built around.
//!
//! - [`StackCarrier`]: Access to an error's stack and the error it wraps
//! - [`ChainLink`]: Object-safe form of a stack-carrying error stored in a chain
//! - [`FrameClassifier`]: Policy deciding which frames are collapsed when printing
//! - [`TraceResultExt`]: Stack capture and wrapping for `Result` errors
//!
//! # Examples
//!
//! ```
//! use stack_rail::traits::{FrameClassifier, KeepAll, StackCarrier};
//! use stack_rail::TracedError;
//!
//! let err = TracedError::new("boom");
//! assert!(err.wrapped().is_none());
//! assert!(!KeepAll.should_skip("anything.rs"));
//! ```

pub mod frame_classifier;
pub mod result_ext;
pub mod stack_carrier;

pub use frame_classifier::{FrameClassifier, KeepAll, SourceRootClassifier};
pub use result_ext::TraceResultExt;
pub use stack_carrier::{ChainLink, StackCarrier};
