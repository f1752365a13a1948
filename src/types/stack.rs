//! Captured call stacks.
//!
//! A [`Stack`] stores program counters innermost-first: index 0 is the call
//! site closest to where the capture happened, the last index is the one
//! closest to the thread entry point. All positional accessors on this type
//! count from the *outermost* end instead, which is the order merging and
//! printing walk the stack in.
//!
//! # Examples
//!
//! ```
//! use stack_rail::{ProgramCounter, Stack};
//!
//! let stack: Stack = [3, 2, 1].into_iter().map(ProgramCounter::new).collect();
//!
//! assert_eq!(stack.len(), 3);
//! assert_eq!(stack.pc_from_outermost(0), Some(ProgramCounter::new(1)));
//! assert_eq!(stack.innermost(), Some(ProgramCounter::new(3)));
//! ```
use core::fmt;
use smallvec::SmallVec;

use crate::traits::frame_classifier::SourceRootClassifier;
use crate::types::frame::{Frame, FrameResolver, SymbolResolver};
use crate::types::program_counter::ProgramCounter;
use crate::types::stack_formatter::{StackFormatConfig, StackFormatter};

/// SmallVec-backed program counter storage.
///
/// Shallow stacks stay inline; anything deeper spills to the heap.
pub type StackVec = SmallVec<[ProgramCounter; 32]>;

/// Ordered snapshot of program counters, innermost call site first.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Stack {
    pub(crate) pcs: StackVec,
}

impl Stack {
    /// Creates an empty stack.
    #[inline]
    pub fn new() -> Self {
        Self { pcs: StackVec::new() }
    }

    /// Captures the caller's stack. See [`capture`](crate::capture).
    #[inline(never)]
    pub fn capture(skip: usize) -> Self {
        crate::capture::capture(skip + 1)
    }

    /// Builds a stack from counters given innermost-first.
    #[inline]
    pub fn from_pcs(pcs: &[ProgramCounter]) -> Self {
        Self { pcs: StackVec::from_slice(pcs) }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pcs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pcs.is_empty()
    }

    /// Raw counters in storage order (innermost first).
    #[inline]
    pub fn program_counters(&self) -> &[ProgramCounter] {
        &self.pcs
    }

    /// Counter closest to the capture point.
    #[inline]
    pub fn innermost(&self) -> Option<ProgramCounter> {
        self.pcs.first().copied()
    }

    /// Counter closest to the thread entry point.
    #[inline]
    pub fn outermost(&self) -> Option<ProgramCounter> {
        self.pcs.last().copied()
    }

    /// Counter at `position`, where position 0 is the outermost entry.
    #[inline]
    pub fn pc_from_outermost(&self, position: usize) -> Option<ProgramCounter> {
        let len = self.pcs.len();
        if position < len {
            Some(self.pcs[len - 1 - position])
        } else {
            None
        }
    }

    /// Iterates counters from the outermost entry inward.
    #[inline]
    pub fn iter_from_outermost(
        &self,
    ) -> core::iter::Copied<core::iter::Rev<core::slice::Iter<'_, ProgramCounter>>> {
        self.pcs.iter().rev().copied()
    }

    /// Resolves the frame at `position` counted from the outermost entry.
    ///
    /// Positions past the end yield an empty [`Frame`].
    #[inline]
    pub fn frame(&self, position: usize) -> Frame {
        self.frame_with(&SymbolResolver, position)
    }

    /// Same as [`Stack::frame`] with a caller-supplied resolver.
    pub fn frame_with<R>(&self, resolver: &R, position: usize) -> Frame
    where
        R: FrameResolver + ?Sized,
    {
        match self.pc_from_outermost(position) {
            Some(pc) => resolver.resolve(pc),
            None => Frame::default(),
        }
    }

    /// Resolves every frame, outermost first.
    pub fn frames(&self) -> impl Iterator<Item = Frame> + '_ {
        self.iter_from_outermost().map(|pc| SymbolResolver.resolve(pc))
    }

    /// Length of the common run of counters shared at the outermost end.
    ///
    /// Two stacks captured on the same thread share everything from the
    /// entry point down to the frame where their call paths split.
    pub fn shared_root_len(&self, other: &Stack) -> usize {
        self.iter_from_outermost()
            .zip(other.iter_from_outermost())
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// Moves the counters out, leaving this stack empty.
    #[inline]
    pub fn take(&mut self) -> Stack {
        core::mem::take(self)
    }

    #[inline]
    pub fn clear(&mut self) {
        self.pcs.clear();
    }
}

impl FromIterator<ProgramCounter> for Stack {
    fn from_iter<I: IntoIterator<Item = ProgramCounter>>(iter: I) -> Self {
        Self { pcs: iter.into_iter().collect() }
    }
}

impl From<StackVec> for Stack {
    #[inline]
    fn from(pcs: StackVec) -> Self {
        Self { pcs }
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.pcs.iter()).finish()
    }
}

/// Renders with [`StackFormatConfig::default`], innermost call first.
impl fmt::Display for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = StackFormatConfig::default().format_using(
            self,
            None,
            &SymbolResolver,
            SourceRootClassifier::new,
        );
        f.write_str(&text)
    }
}
