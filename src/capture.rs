//! Call stack capture.
//!
//! [`capture`] walks the current thread's frames with the `backtrace` crate
//! and records one [`ProgramCounter`] per frame. Frames belonging to the
//! unwinder and to `capture` itself are cut off by locating `capture`'s own
//! frame, so `skip` only has to account for the caller's helpers.
//!
//! # Examples
//!
//! ```
//! use stack_rail::capture;
//!
//! #[inline(never)]
//! fn record() -> stack_rail::Stack {
//!     capture(0)
//! }
//!
//! let stack = record();
//! assert!(!stack.is_empty());
//! assert!(stack.len() <= stack_rail::MAX_DEPTH);
//! ```
use crate::traits::frame_classifier::SourceRootClassifier;
use crate::types::frame::SymbolResolver;
use crate::types::program_counter::ProgramCounter;
use crate::types::stack::{Stack, StackVec};
use crate::types::stack_formatter::{StackFormatConfig, StackFormatter};

/// Maximum number of program counters kept per capture.
pub const MAX_DEPTH: usize = 64;

/// Upper bound on unwinder-internal frames walked before `capture` is found.
const INTERNAL_FRAMES: usize = 16;

/// Captures the calling thread's stack.
///
/// The result excludes `capture` itself and `skip` further frames above it,
/// so helpers that capture on behalf of their caller pass the number of
/// helper frames to hide. At most [`MAX_DEPTH`] entries are kept; deeper
/// stacks lose their outermost frames.
#[inline(never)]
pub fn capture(skip: usize) -> Stack {
    let anchor = capture as fn(usize) -> Stack as usize;
    let budget = INTERNAL_FRAMES + skip + MAX_DEPTH;

    let mut walked: Vec<(ProgramCounter, usize)> = Vec::with_capacity(budget.min(128));
    let mut truncated = false;
    backtrace::trace(|frame| {
        if walked.len() == budget {
            truncated = true;
            return false;
        }
        walked.push((ProgramCounter::from_ptr(frame.ip()), frame.symbol_address() as usize));
        true
    });

    let start = walked
        .iter()
        .position(|&(_, symbol)| symbol == anchor)
        .map_or(0, |own| own + 1)
        + skip;

    let pcs: StackVec = walked.iter().skip(start).take(MAX_DEPTH).map(|&(pc, _)| pc).collect();

    if truncated || walked.len().saturating_sub(start) > MAX_DEPTH {
        note_truncated(skip);
    }

    Stack::from(pcs)
}

#[cfg(feature = "tracing")]
fn note_truncated(skip: usize) {
    tracing::trace!(max_depth = MAX_DEPTH, skip, "stack capture truncated");
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn note_truncated(_skip: usize) {}

/// Returns the caller's current stack rendered with the default formatter.
///
/// `skip` hides that many additional frames above the caller.
#[inline(never)]
pub fn current_stack(skip: usize) -> String {
    let stack = capture(skip + 1);
    StackFormatConfig::default().format_using(
        &stack,
        None,
        &SymbolResolver,
        SourceRootClassifier::new,
    )
}
