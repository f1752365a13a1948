//! Macros for capturing stacks at the call site.

/// Creates a [`TracedError`](crate::TracedError) whose stack starts at the
/// macro invocation.
///
/// With a format string the core error is the formatted `String`; with any
/// other expression the value itself becomes the core error.
///
/// # Examples
///
/// ```
/// use stack_rail::traced;
///
/// let id = 7;
/// let err = traced!("user {} not found", id);
/// assert_eq!(err.to_string(), "user 7 not found");
///
/// let io = traced!(std::io::Error::other("refused"));
/// assert_eq!(io.core_error().to_string(), "refused");
/// ```
#[macro_export]
macro_rules! traced {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::TracedError::new(::std::format!($fmt $(, $arg)*))
    };
    ($err:expr $(,)?) => {
        $crate::TracedError::new($err)
    };
}

/// Captures the current [`Stack`](crate::Stack), starting at the macro
/// invocation. An optional argument hides that many extra frames.
///
/// # Examples
///
/// ```
/// use stack_rail::stack;
///
/// let here = stack!();
/// assert!(!here.is_empty());
/// ```
#[macro_export]
macro_rules! stack {
    () => {
        $crate::capture(0)
    };
    ($skip:expr) => {
        $crate::capture($skip)
    };
}

/// Renders the current call stack as text, starting at the macro invocation.
///
/// # Examples
///
/// ```
/// use stack_rail::stack_trace;
///
/// let text: String = stack_trace!();
/// println!("{text}");
/// ```
#[macro_export]
macro_rules! stack_trace {
    () => {
        $crate::current_stack(0)
    };
}
