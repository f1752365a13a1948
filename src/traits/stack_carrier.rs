//! Access to the stack an error carries and to the error it wraps.
//!
//! Merging and reporting only need these few capabilities, so any error
//! representation can take part by implementing [`StackCarrier`].
//!
//! # Examples
//!
//! ```
//! use stack_rail::{ProgramCounter, Stack, StackCarrier};
//!
//! struct Leaf {
//!     stack: Stack,
//! }
//!
//! impl StackCarrier for Leaf {
//!     fn stack(&self) -> Option<&Stack> {
//!         Some(&self.stack)
//!     }
//!
//!     fn stack_mut(&mut self) -> Option<&mut Stack> {
//!         Some(&mut self.stack)
//!     }
//! }
//!
//! let mut leaf = Leaf { stack: Stack::new() };
//! let old = leaf.replace_stack(Stack::from_pcs(&[ProgramCounter::new(7)]));
//! assert_eq!(old, Some(Stack::new()));
//! assert_eq!(leaf.stack().map(Stack::len), Some(1));
//! ```
use core::error::Error;

use crate::types::stack::Stack;

/// An error value that may own a [`Stack`] and may wrap one other error.
pub trait StackCarrier {
    /// The stack owned by this error, if it has one.
    fn stack(&self) -> Option<&Stack>;

    fn stack_mut(&mut self) -> Option<&mut Stack>;

    /// The directly wrapped error, when it can carry a stack too.
    fn wrapped(&self) -> Option<&dyn StackCarrier> {
        None
    }

    fn wrapped_mut(&mut self) -> Option<&mut dyn StackCarrier> {
        None
    }

    /// Swaps in a new stack, returning the previous one.
    ///
    /// Returns `None` (and drops `stack`) when this error owns no stack.
    fn replace_stack(&mut self, stack: Stack) -> Option<Stack> {
        self.stack_mut().map(|slot| core::mem::replace(slot, stack))
    }

    /// See [`merge_wrapped`](crate::merge::merge_wrapped).
    fn merge_wrapped(&mut self) -> bool {
        crate::merge::merge_wrapped(self)
    }
}

/// Object-safe bundle for errors stored inside a chain.
///
/// Implemented for every `StackCarrier + Error + Send + Sync + 'static` type.
pub trait ChainLink: StackCarrier + Error + Send + Sync + 'static {
    fn as_error(&self) -> &(dyn Error + 'static);

    fn as_carrier(&self) -> &dyn StackCarrier;

    fn as_carrier_mut(&mut self) -> &mut dyn StackCarrier;
}

impl<T> ChainLink for T
where
    T: StackCarrier + Error + Send + Sync + 'static,
{
    #[inline]
    fn as_error(&self) -> &(dyn Error + 'static) {
        self
    }

    #[inline]
    fn as_carrier(&self) -> &dyn StackCarrier {
        self
    }

    #[inline]
    fn as_carrier_mut(&mut self) -> &mut dyn StackCarrier {
        self
    }
}
