//! One-shot deferred actions tied to an open/close generation.
//!
//! Opening and closing both bump the controller's generation. A task keeps
//! the generation it was created under; when it fires against a controller
//! that has moved on, it is dropped.

use std::fmt;
use std::time::Duration;

/// Delay before focus moves into a freshly opened overlay.
pub const FOCUS_DELAY: Duration = Duration::from_millis(100);

/// Upper bound on waiting for the close transition before the image is released.
///
/// Slightly longer than the backdrop's CSS fade so the transition-end
/// notification normally arrives first.
pub const IMAGE_RELEASE_FALLBACK: Duration = Duration::from_millis(300);

/// Monotonic counter of open/close transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }

    pub(crate) fn next(self) -> Self {
        Generation(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen-{}", self.0)
    }
}

/// What a deferred task does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Move focus to the first focusable element in the overlay
    FocusFirst,
    /// Clear the image source after the overlay has faded out
    ReleaseImage,
}

/// A scheduled one-shot action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeferredTask {
    pub action: DeferredAction,
    pub generation: Generation,
    pub delay: Duration,
}

impl DeferredTask {
    pub(crate) fn focus(generation: Generation) -> Self {
        Self {
            action: DeferredAction::FocusFirst,
            generation,
            delay: FOCUS_DELAY,
        }
    }

    pub(crate) fn release_image(generation: Generation) -> Self {
        Self {
            action: DeferredAction::ReleaseImage,
            generation,
            delay: IMAGE_RELEASE_FALLBACK,
        }
    }

    /// Sleep for the task's delay.
    ///
    /// The caller hands the task back to the controller afterwards, which
    /// decides whether it is still current.
    pub async fn elapsed(self) -> Self {
        tokio::time::sleep(self.delay).await;
        self
    }
}
