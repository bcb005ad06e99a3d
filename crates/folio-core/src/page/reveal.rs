//! Reveal-on-scroll bookkeeping.
//!
//! The view layer reports intersection ratios per element key; the tracker
//! decides when an element becomes revealed and whether it is still
//! observed.

use std::collections::HashSet;

/// How elements reveal when scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSettings {
    /// Reveal once and stop observing
    pub once: bool,
    /// Fade duration in milliseconds
    pub duration_ms: u32,
    /// Distance into the viewport before an element counts as visible
    pub offset_px: u32,
    /// Fraction of the element that must be visible
    pub threshold: f64,
}

impl RevealSettings {
    /// Section fade-ins.
    pub const SECTIONS: RevealSettings = RevealSettings {
        once: true,
        duration_ms: 800,
        offset_px: 100,
        threshold: 0.0,
    };

    /// Skill bars fill once a third of the bar is visible.
    pub const SKILL_BARS: RevealSettings = RevealSettings {
        once: true,
        duration_ms: 800,
        offset_px: 0,
        threshold: 0.35,
    };

    /// `rootMargin` for an intersection observer.
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.offset_px)
    }

    /// Inline style carrying the fade duration.
    pub fn transition_style(&self) -> String {
        format!("transition-duration: {}ms;", self.duration_ms)
    }
}

/// Slack allowed below the threshold: the crossing callback can report a
/// ratio a hair under the threshold it fired for.
pub const RATIO_TOLERANCE: f64 = 0.01;

/// Tracks which keyed elements have been revealed.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    settings: RevealSettings,
    revealed: HashSet<String>,
}

impl RevealTracker {
    pub fn new(settings: RevealSettings) -> Self {
        Self {
            settings,
            revealed: HashSet::new(),
        }
    }

    pub fn settings(&self) -> &RevealSettings {
        &self.settings
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    /// Whether `key` still needs intersection reports.
    pub fn is_observed(&self, key: &str) -> bool {
        !(self.settings.once && self.is_revealed(key))
    }

    /// Record an intersection report. Returns `true` if visibility changed.
    pub fn observe(&mut self, key: &str, ratio: f64) -> bool {
        if !self.is_observed(key) {
            return false;
        }
        let visible = ratio > 0.0 && ratio + RATIO_TOLERANCE >= self.settings.threshold;
        if visible {
            let changed = self.revealed.insert(key.to_string());
            if changed {
                tracing::debug!(key, ratio, "Revealed element");
            }
            changed
        } else {
            self.revealed.remove(key)
        }
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}
