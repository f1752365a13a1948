//! Merging the stacks of an error and the error it wraps.
//!
//! When one error wraps another on the same thread, both stacks end with the
//! same run of call sites: everything from the thread entry point down to
//! the function that did the wrapping. Merging keeps that run once, on the
//! outer error, and empties the inner error's stack so it is never printed
//! twice.
//!
//! # Examples
//!
//! ```
//! use stack_rail::{merge_stacks, ProgramCounter, Stack};
//!
//! let pcs = |addrs: &[usize]| addrs.iter().copied().map(ProgramCounter::new).collect::<Stack>();
//!
//! // innermost first; both end in [2, 1]
//! let mut outer = pcs(&[30, 2, 1]);
//! let mut inner = pcs(&[11, 10, 2, 1]);
//!
//! assert!(merge_stacks(&mut outer, &mut inner));
//! assert_eq!(outer, pcs(&[11, 10, 30, 2, 1]));
//! assert!(inner.is_empty());
//! ```
use crate::traits::stack_carrier::StackCarrier;
use crate::types::stack::{Stack, StackVec};

/// Moves the call sites unique to `inner` onto `outer`.
///
/// `outer` becomes `inner`'s innermost entries that are not part of the
/// shared outermost run, followed by all of `outer`. `inner` is emptied.
/// Returns `false` and leaves both stacks untouched when they share nothing
/// at the outermost end, which includes either stack being empty.
pub fn merge_stacks(outer: &mut Stack, inner: &mut Stack) -> bool {
    let shared = outer.shared_root_len(inner);
    if shared == 0 {
        return false;
    }

    let unique = inner.len() - shared;
    let mut combined = StackVec::with_capacity(unique + outer.len());
    combined.extend_from_slice(&inner.program_counters()[..unique]);
    combined.extend_from_slice(outer.program_counters());

    *outer = Stack::from(combined);
    *inner = Stack::new();

    note_merged(shared, unique, outer.len());
    true
}

/// Merges `outer`'s stack with the stack of the error it directly wraps.
///
/// No-op when either side carries no stack or the two share no call path.
/// Running it again on an already merged pair does nothing.
pub fn merge_wrapped<C>(outer: &mut C) -> bool
where
    C: StackCarrier + ?Sized,
{
    let Some(mut inner) =
        outer.wrapped_mut().and_then(|wrapped| wrapped.stack_mut()).map(Stack::take)
    else {
        return false;
    };

    let merged = outer.stack_mut().is_some_and(|stack| merge_stacks(stack, &mut inner));

    if let Some(slot) = outer.wrapped_mut().and_then(|wrapped| wrapped.stack_mut()) {
        *slot = inner;
    }
    merged
}

#[cfg(feature = "tracing")]
fn note_merged(shared: usize, unique: usize, depth: usize) {
    tracing::trace!(shared, unique, depth, "merged wrapped error stack");
}

#[cfg(not(feature = "tracing"))]
#[inline(always)]
fn note_merged(_shared: usize, _unique: usize, _depth: usize) {}
