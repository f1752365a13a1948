//! Symbolic frames and the resolvers that produce them.
//!
//! A [`Frame`] is a derived view of one [`ProgramCounter`]; it is never
//! stored on its own. Resolution goes through the [`FrameResolver`]
//! capability so the formatter can be driven by the running binary's debug
//! info ([`SymbolResolver`]) or by any other symbol table.
//!
//! # Examples
//!
//! ```
//! use stack_rail::{Frame, FrameResolver, ProgramCounter};
//!
//! let table = |pc: ProgramCounter| match pc.addr() {
//!     1 => Frame::new("app::main", "src/main.rs", 3),
//!     _ => Frame::default(),
//! };
//!
//! assert_eq!(table.resolve(ProgramCounter::new(1)).to_string(), "src/main.rs:3: app::main");
//! assert!(table.resolve(ProgramCounter::new(9)).is_empty());
//! ```
use core::fmt;

use crate::types::program_counter::ProgramCounter;

/// Resolved function name, source file and line of one call site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Frame {
    function: String,
    file: String,
    line: u32,
}

impl Frame {
    pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self { function: function.into(), file: file.into(), line }
    }

    /// Fully qualified function name, or `""` when unknown.
    #[inline]
    pub fn function(&self) -> &str {
        &self.function
    }

    /// Source file path, or `""` when unknown.
    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Source line, or `0` when unknown.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// True when nothing could be resolved for this frame.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.function.is_empty() && self.file.is_empty() && self.line == 0
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.file, self.line, self.function)
    }
}

/// Turns a program counter into a [`Frame`].
///
/// Implementations must be deterministic for the lifetime of the process and
/// must not fail: anything they cannot resolve comes back as
/// [`Frame::default`].
pub trait FrameResolver {
    fn resolve(&self, pc: ProgramCounter) -> Frame;
}

impl<F> FrameResolver for F
where
    F: Fn(ProgramCounter) -> Frame,
{
    #[inline]
    fn resolve(&self, pc: ProgramCounter) -> Frame {
        self(pc)
    }
}

/// Resolver backed by the debug info of the running binary.
///
/// When an address maps to several inlined symbols the innermost one is
/// used. Names are demangled without the trailing hash.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SymbolResolver;

impl FrameResolver for SymbolResolver {
    fn resolve(&self, pc: ProgramCounter) -> Frame {
        let mut resolved: Option<Frame> = None;
        backtrace::resolve(pc.as_ptr(), |symbol| {
            if resolved.is_some() {
                return;
            }
            let function = symbol.name().map(|name| format!("{name:#}")).unwrap_or_default();
            let file = symbol
                .filename()
                .map(|path| path.to_string_lossy().into_owned())
                .unwrap_or_default();
            let line = symbol.lineno().unwrap_or(0);
            resolved = Some(Frame { function, file, line });
        });
        resolved.unwrap_or_default()
    }
}
