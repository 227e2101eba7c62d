//! Stack safety for recursive tree traversal.
//!
//! Syntax trees have no depth bound. A walker or rewriter that recurses
//! through native calls can overflow the thread stack on deeply nested (or
//! adversarial) input. This crate provides two pieces:
//!
//! - [`ensure_sufficient_stack`]: grows the stack on demand before running a
//!   closure (via `stacker` on native targets, passthrough on WASM).
//! - [`RecursionDepth`] + [`with_depth_guard`]: a per-traversal depth counter.
//!   Shallow frames run directly; once the depth passes a threshold every
//!   further frame goes through [`ensure_sufficient_stack`].
//!
//! # Configuration
//!
//! - **Red zone**: 100KB - If less than this remains, we grow the stack
//! - **Growth size**: 1MB - Each growth allocates this much additional space
//! - **Depth threshold**: 30 frames before the stack check kicks in

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone threshold, this will
/// allocate additional stack space before calling `f`.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Recursion depth of one traversal.
///
/// Incremented on entry to a node, decremented on exit. Frames deeper than
/// `threshold` are considered deep and get a stack check.
#[derive(Clone, Debug)]
pub struct RecursionDepth {
    current: usize,
    max_reached: usize,
    threshold: usize,
}

impl RecursionDepth {
    /// Depth after which each frame goes through [`ensure_sufficient_stack`].
    pub const DEFAULT_THRESHOLD: usize = 30;

    pub const fn new() -> Self {
        Self::with_threshold(Self::DEFAULT_THRESHOLD)
    }

    pub const fn with_threshold(threshold: usize) -> Self {
        RecursionDepth {
            current: 0,
            max_reached: 0,
            threshold,
        }
    }

    /// Current nesting depth.
    #[inline]
    pub const fn current(&self) -> usize {
        self.current
    }

    /// Deepest nesting seen since construction.
    #[inline]
    pub const fn max_reached(&self) -> usize {
        self.max_reached
    }

    #[inline]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }

    /// Enter one level. Returns `true` when the new depth is past the threshold.
    #[inline]
    pub fn enter(&mut self) -> bool {
        self.current += 1;
        if self.current > self.max_reached {
            self.max_reached = self.current;
        }
        self.current > self.threshold
    }

    /// Leave one level.
    #[inline]
    pub fn exit(&mut self) {
        debug_assert!(self.current > 0, "recursion depth underflow");
        self.current = self.current.saturating_sub(1);
    }
}

impl Default for RecursionDepth {
    fn default() -> Self {
        Self::new()
    }
}

/// Implemented by traversals that recurse through native calls.
pub trait DepthTracked {
    fn recursion_depth(&mut self) -> &mut RecursionDepth;
}

/// Run `f` one level deeper, checking the stack once past the threshold.
///
/// The depth is restored when `f` returns. A panic inside `f` leaves the
/// counter raised; the traversal that panicked is not expected to resume.
pub fn with_depth_guard<T, R>(this: &mut T, f: impl FnOnce(&mut T) -> R) -> R
where
    T: DepthTracked + ?Sized,
{
    let deep = this.recursion_depth().enter();
    let result = if deep {
        ensure_sufficient_stack(|| f(this))
    } else {
        f(this)
    };
    this.recursion_depth().exit();
    result
}
