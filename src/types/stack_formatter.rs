//! Stack rendering.
//!
//! Frames are walked from the outermost entry inward and printed innermost
//! first, one line per call site:
//!
//! ```text
//! src/db.rs:88: app::db::Pool::get
//! src/db.rs:41: ...connect
//! <3 frames omitted>
//! src/main.rs:12: app::main
//! ```
//!
//! A function name that shares a prefix with the line below it (its caller)
//! is shortened to `...` plus the differing tail; the prefix always ends on
//! a separator so names are never cut mid-token.

use crate::capture::capture;
use crate::traits::frame_classifier::{FrameClassifier, SourceRootClassifier};
use crate::types::frame::{Frame, FrameResolver, SymbolResolver};
use crate::types::stack::Stack;

/// Separator placed between rendered lines by default.
pub const DEFAULT_SEPARATOR: &str = "\n";

/// Characters that end a name segment: `.` and `/` for dotted or slashed
/// paths, `:` for Rust's `::`.
pub const DEFAULT_NAME_SEPARATORS: &[char] = &['.', '/', ':'];

/// Trait for customizing stack rendering.
pub trait StackFormatter {
    fn separator(&self) -> &str {
        DEFAULT_SEPARATOR
    }

    fn name_separators(&self) -> &[char] {
        DEFAULT_NAME_SEPARATORS
    }

    fn compress_names(&self) -> bool {
        true
    }

    /// Whether [`format`](StackFormatter::format) drops the frames it shares
    /// with the stack of the code doing the printing.
    fn relative_to_caller(&self) -> bool {
        false
    }

    /// Renders one kept frame. `shown_name` is the (possibly shortened)
    /// function name; `elided` is true when a prefix was stripped.
    fn format_frame(&self, frame: &Frame, shown_name: &str, elided: bool) -> String {
        let dots = if elided { "..." } else { "" };
        format!("{}:{}: {}{}", frame.file(), frame.line(), dots, shown_name)
    }

    fn format_omitted(&self, count: usize) -> String {
        format!("<{count} frames omitted>")
    }

    /// Renders `stack` against the running binary's symbols, hiding
    /// toolchain and dependency frames.
    #[inline(never)]
    fn format(&self, stack: &Stack) -> String {
        if stack.is_empty() {
            return String::new();
        }
        let caller = if self.relative_to_caller() { Some(capture(0)) } else { None };
        self.format_using(stack, caller.as_ref(), &SymbolResolver, SourceRootClassifier::new)
    }

    /// Renders `stack` with an explicit resolver and classifier factory.
    ///
    /// `seed` receives the source file of the outermost frame. When `caller`
    /// is given, leading frames whose function names match `caller` at the
    /// same outermost-relative position are dropped until the first mismatch.
    fn format_using<R, C, F>(
        &self,
        stack: &Stack,
        caller: Option<&Stack>,
        resolver: &R,
        seed: F,
    ) -> String
    where
        R: FrameResolver + ?Sized,
        C: FrameClassifier,
        F: FnOnce(&str) -> C,
    {
        render(self, stack, caller, resolver, seed)
    }
}

/// Configuration-based stack formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFormatConfig {
    pub separator: String,
    pub name_separators: Vec<char>,
    pub compress_names: bool,
    pub relative_to_caller: bool,
}

impl Default for StackFormatConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.into(),
            name_separators: DEFAULT_NAME_SEPARATORS.to_vec(),
            compress_names: true,
            relative_to_caller: false,
        }
    }
}

impl StackFormatConfig {
    /// Omits frames shared with the printing call path.
    #[inline]
    pub fn relative() -> Self {
        Self { relative_to_caller: true, ..Default::default() }
    }

    /// One tab-indented line per frame, for appending below a message.
    #[inline]
    pub fn indented() -> Self {
        Self { separator: "\n\t".into(), ..Default::default() }
    }

    /// Full function names on every line.
    #[inline]
    pub fn verbatim() -> Self {
        Self { compress_names: false, ..Default::default() }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl StackFormatter for StackFormatConfig {
    fn separator(&self) -> &str {
        &self.separator
    }

    fn name_separators(&self) -> &[char] {
        &self.name_separators
    }

    fn compress_names(&self) -> bool {
        self.compress_names
    }

    fn relative_to_caller(&self) -> bool {
        self.relative_to_caller
    }
}

fn render<T, R, C, F>(
    formatter: &T,
    stack: &Stack,
    caller: Option<&Stack>,
    resolver: &R,
    seed: F,
) -> String
where
    T: StackFormatter + ?Sized,
    R: FrameResolver + ?Sized,
    C: FrameClassifier,
    F: FnOnce(&str) -> C,
{
    if stack.is_empty() {
        return String::new();
    }

    let mut outermost = Some(stack.frame_with(resolver, 0));
    let classifier = seed(outermost.as_ref().map_or("", Frame::file));

    let mut shared_with = caller;
    let mut previous: Option<Frame> = None;
    let mut omitted = 0usize;
    let mut lines: Vec<String> = Vec::with_capacity(stack.len());

    for (position, pc) in stack.iter_from_outermost().enumerate() {
        let frame = match outermost.take() {
            Some(frame) => frame,
            None => resolver.resolve(pc),
        };

        if let Some(caller) = shared_with {
            if position < caller.len()
                && caller.frame_with(resolver, position).function() == frame.function()
            {
                continue;
            }
            shared_with = None;
        }

        let previous_name = previous.as_ref().map(Frame::function);
        if previous_name == Some(frame.function()) {
            continue;
        }

        if classifier.should_skip(frame.file()) {
            omitted += 1;
            continue;
        }
        if omitted > 0 {
            lines.push(formatter.format_omitted(omitted));
            omitted = 0;
        }

        let name = frame.function();
        let trim = match previous_name {
            Some(prev) if formatter.compress_names() => {
                shared_name_prefix(name, prev, formatter.name_separators())
            }
            _ => 0,
        };
        lines.push(formatter.format_frame(&frame, &name[trim..], trim > 0));
        previous = Some(frame);
    }

    let separator = formatter.separator();
    let capacity = lines.iter().map(|line| line.len() + separator.len()).sum();
    let mut result = String::with_capacity(capacity);
    for (i, line) in lines.iter().rev().enumerate() {
        if i > 0 {
            result.push_str(separator);
        }
        result.push_str(line);
    }
    result
}

/// Byte length of the longest prefix of `name` that ends on a separator and
/// is also a prefix of `previous`.
pub(crate) fn shared_name_prefix(name: &str, previous: &str, separators: &[char]) -> usize {
    let mut trim = 0;
    while let Some(offset) = name[trim..].find(separators) {
        let at = trim + offset;
        let end = at + name[at..].chars().next().map_or(1, char::len_utf8);
        if !previous.starts_with(&name[..end]) {
            break;
        }
        trim = end;
    }
    trim
}
