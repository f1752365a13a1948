use super::TracedError;
use crate::traits::stack_carrier::StackCarrier;
use crate::types::stack::Stack;
use core::fmt::{Debug, Display};

impl<E: Display> Display for TracedError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if f.alternate() {
            return f.write_str(&self.report());
        }
        Display::fmt(&self.core_error, f)?;
        if let Some(wrapped) = &self.wrapped {
            write!(f, ": {wrapped}")?;
        }
        Ok(())
    }
}

impl<E> core::error::Error for TracedError<E>
where
    E: Debug + Display,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.wrapped.as_deref().map(|link| link.as_error())
    }
}

impl<E> StackCarrier for TracedError<E> {
    #[inline]
    fn stack(&self) -> Option<&Stack> {
        Some(&self.stack)
    }

    #[inline]
    fn stack_mut(&mut self) -> Option<&mut Stack> {
        Some(&mut self.stack)
    }

    fn wrapped(&self) -> Option<&dyn StackCarrier> {
        self.wrapped.as_deref().map(|link| link.as_carrier())
    }

    fn wrapped_mut(&mut self) -> Option<&mut dyn StackCarrier> {
        self.wrapped.as_deref_mut().map(|link| link.as_carrier_mut())
    }
}

/// Captures at the conversion site, so `?` records where the error surfaced.
impl<E> From<E> for TracedError<E> {
    #[inline(never)]
    fn from(error: E) -> Self {
        Self::with_skip(error, 1)
    }
}
