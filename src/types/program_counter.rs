//! Process-local call-site addresses.

use core::ffi::c_void;
use core::fmt;

/// Return address of one call site, as reported by the unwinder.
///
/// The value is only meaningful inside the process that captured it; two
/// equal counters always resolve to the same [`Frame`](crate::types::Frame).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct ProgramCounter(usize);

impl ProgramCounter {
    /// Wraps a raw address.
    #[inline]
    pub const fn new(addr: usize) -> Self {
        Self(addr)
    }

    #[inline]
    pub(crate) fn from_ptr(ptr: *mut c_void) -> Self {
        Self(ptr as usize)
    }

    /// Returns the raw address.
    #[inline]
    pub const fn addr(self) -> usize {
        self.0
    }

    #[inline]
    pub(crate) fn as_ptr(self) -> *mut c_void {
        self.0 as *mut c_void
    }
}

impl fmt::Debug for ProgramCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::Display for ProgramCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl From<usize> for ProgramCounter {
    #[inline]
    fn from(addr: usize) -> Self {
        Self(addr)
    }
}
