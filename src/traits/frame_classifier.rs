//! Policies deciding which frames are noise.
//!
//! The formatter seeds a classifier with the source file of the outermost
//! frame of the stack being printed (usually a toolchain file such as
//! `std/src/rt.rs`) and then asks it about every other frame. Frames it
//! rejects are collapsed into a `<N frames omitted>` marker.
//!
//! # Examples
//!
//! ```
//! use stack_rail::traits::{FrameClassifier, SourceRootClassifier};
//!
//! let classifier = SourceRootClassifier::new("/rustc/abc/library/std/src/rt.rs");
//!
//! assert!(classifier.should_skip("/rustc/abc/library/core/src/ops/function.rs"));
//! assert!(!classifier.should_skip("src/main.rs"));
//! ```
use std::borrow::Cow;

/// Decides whether a frame's source file is uninteresting.
pub trait FrameClassifier {
    fn should_skip(&self, file: &str) -> bool;
}

/// Classifier that keeps every frame.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeepAll;

impl KeepAll {
    /// Seed constructor, usable wherever a classifier factory is expected.
    #[inline]
    pub fn new(_seed_file: &str) -> Self {
        KeepAll
    }
}

impl FrameClassifier for KeepAll {
    #[inline]
    fn should_skip(&self, _file: &str) -> bool {
        false
    }
}

/// Path fragments that always mark toolchain or third-party sources.
const FOREIGN_MARKERS: &[&str] = &["/rustc/", "/rustlib/", "/.cargo/registry/", "/.cargo/git/"];

const LIBRARY_DIR: &str = "/library/";

/// Default classifier: hides toolchain, dependency and unresolved frames.
///
/// When the seed file lives in the Rust standard library sources, everything
/// under the same `library/` root is skipped as well, which covers toolchains
/// whose sources are not under a `/rustc/` remapped prefix.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SourceRootClassifier {
    root: Option<String>,
}

impl SourceRootClassifier {
    pub fn new(seed_file: &str) -> Self {
        let seed = normalize(seed_file);
        let root = seed.find(LIBRARY_DIR).map(|at| seed[..at + LIBRARY_DIR.len()].to_owned());
        Self { root }
    }

    /// Toolchain root derived from the seed, if any.
    #[inline]
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }
}

impl FrameClassifier for SourceRootClassifier {
    fn should_skip(&self, file: &str) -> bool {
        if file.is_empty() {
            return true;
        }
        let file = normalize(file);
        if self.root.as_deref().is_some_and(|root| file.starts_with(root)) {
            return true;
        }
        FOREIGN_MARKERS.iter().any(|marker| file.contains(*marker))
    }
}

fn normalize(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}
